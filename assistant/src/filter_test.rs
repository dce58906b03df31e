use super::*;

fn workflow(id: usize, title: &str, description: &str, kind: WorkflowKind) -> Workflow {
    Workflow {
        id: id.to_string(),
        title: title.to_owned(),
        description: description.to_owned(),
        kind,
        steps: 2,
    }
}

/// Twenty workflows: three drafts, one of which mentions an NDA.
fn catalog() -> Vec<Workflow> {
    let mut items = vec![
        workflow(1, "Draft an NDA", "Mutual confidentiality agreement", WorkflowKind::Draft),
        workflow(2, "Draft a client alert", "Summarize a regulatory change", WorkflowKind::Draft),
        workflow(3, "Draft a memo", "Research memo from case law", WorkflowKind::Draft),
    ];
    for i in 4..=20 {
        let kind = if i % 2 == 0 { WorkflowKind::Review } else { WorkflowKind::Output };
        items.push(workflow(i, &format!("Workflow {i}"), "Tabular extraction", kind));
    }
    items
}

#[test]
fn draft_tab_with_nda_query_shows_one_card() {
    let items = catalog();
    let tab = WorkflowTab::from_key("draft").expect("tab");
    assert_eq!(filter_workflows(&items, tab, "").len(), 3);
    let shown = filter_workflows(&items, tab, "nda");
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id, "1");
}

#[test]
fn recommended_matches_everything_up_to_cap() {
    let items = catalog();
    assert_eq!(matching_workflows(&items, WorkflowTab::Recommended, "").len(), items.len());
    assert_eq!(filter_workflows(&items, WorkflowTab::Recommended, "").len(), WORKFLOW_DISPLAY_LIMIT);

    let few = &items[..5];
    assert_eq!(filter_workflows(few, WorkflowTab::Recommended, "").len(), few.len());
}

#[test]
fn invalid_pattern_falls_back_to_substring() {
    let mut items = catalog();
    items.push(workflow(21, "Review (annex", "Bracketed title", WorkflowKind::Review));
    let matcher = QueryMatcher::new("(annex");
    assert!(matches!(matcher, QueryMatcher::Substring(_)));
    let shown = filter_workflows(&items, WorkflowTab::Recommended, "(ANNEX");
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id, "21");
}

#[test]
fn pattern_queries_are_case_insensitive_regexes() {
    let matcher = QueryMatcher::new("^draft a (memo|client)");
    assert!(matcher.is_match("DRAFT A MEMO"));
    assert!(!matcher.is_match("Draft an NDA"));
    assert!(QueryMatcher::new("   ").is_match("anything"));
}

#[test]
fn query_matches_description_too() {
    let items = catalog();
    let shown = matching_workflows(&items, WorkflowTab::Kind(WorkflowKind::Draft), "case law");
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id, "3");
}

#[test]
fn tab_keys_round_trip() {
    for tab in WorkflowTab::ALL {
        assert_eq!(WorkflowTab::from_key(tab.key()), Some(tab));
    }
    assert_eq!(WorkflowTab::from_key("OUTPUT"), Some(WorkflowTab::Kind(WorkflowKind::Output)));
    assert_eq!(WorkflowTab::from_key("archive"), None);
}

#[test]
fn filtering_leaves_source_untouched() {
    let items = catalog();
    let before = items.clone();
    let _ = filter_workflows(&items, WorkflowTab::Recommended, "workflow");
    assert_eq!(items, before);
}
