use super::*;
use assistant::catalog::WorkflowKind;

fn catalog() -> Vec<Workflow> {
    (0..20)
        .map(|i| Workflow {
            id: format!("w{i}"),
            title: if i == 0 { "Draft an NDA".to_owned() } else { format!("Workflow {i}") },
            description: "Template".to_owned(),
            kind: if i < 3 { WorkflowKind::Draft } else { WorkflowKind::Review },
            steps: 2,
        })
        .collect()
}

#[test]
fn draft_tab_and_query_narrow_the_grid() {
    let items = catalog();
    let mut home = HomeState::default();
    assert_eq!(home.visible(&items).len(), 16);
    assert!(home.select_tab("draft"));
    assert_eq!(home.visible(&items).len(), 3);
    home.query = "NDA".to_owned();
    assert_eq!(home.visible(&items).len(), 1);
    assert!(!home.select_tab("bogus"));
    assert_eq!(home.tab.key(), "draft");
}

#[test]
fn scroll_drives_reveal_and_hint() {
    let items = catalog();
    let total = HomeState::default().matching_count(&items);
    let mut reveal = ScrollReveal::default();
    assert!(reveal.show_scroll_hint(total));
    assert!(reveal.card_style(4).opacity < 0.01);

    assert!(reveal.set_scroll_top(400.0));
    assert!((reveal.progress - 1.0).abs() < f64::EPSILON);
    assert!(!reveal.show_scroll_hint(total));
    assert_eq!(reveal.card_style(4), CardReveal::VISIBLE);
    assert_eq!(reveal.card_style(0), CardReveal::VISIBLE);
}

#[test]
fn scrolling_past_the_end_leaves_progress_alone() {
    let mut reveal = ScrollReveal::default();
    assert!(!reveal.set_scroll_top(0.0));
    assert!(reveal.set_scroll_top(400.0));
    assert!(!reveal.set_scroll_top(900.0));
    assert!((reveal.progress - 1.0).abs() < f64::EPSILON);
}

#[test]
fn scroll_frames_do_not_refilter_the_grid() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use leptos::prelude::*;

    let owner = Owner::new();
    owner.with(|| {
        let items = Arc::new(catalog());
        let home = RwSignal::new(HomeState::default());
        let reveal = RwSignal::new(ScrollReveal::default());
        let filter_runs = Arc::new(AtomicUsize::new(0));

        let visible = {
            let runs = Arc::clone(&filter_runs);
            let items = Arc::clone(&items);
            Memo::new(move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                home.with(|h| h.visible(&items).len())
            })
        };
        let style = Memo::new(move |_| reveal.with(|r| card_style_css(r.card_style(4))));

        assert_eq!(visible.get_untracked(), 16);
        let hidden = style.get_untracked();

        reveal.update(|r| {
            r.set_scroll_top(200.0);
        });
        assert_ne!(style.get_untracked(), hidden);
        assert_eq!(visible.get_untracked(), 16);
        assert_eq!(filter_runs.load(Ordering::SeqCst), 1);
    });
}

#[test]
fn sends_start_one_navigation() {
    let mut home = HomeState::default();
    assert_eq!(home.begin_send(), None);
    home.composer = "Draft an NDA".to_owned();
    assert_eq!(home.begin_send().as_deref(), Some("Draft an NDA"));
    assert_eq!(home.begin_send(), None);
    assert!(!home.begin_workflow());
}

#[test]
fn card_css_formats_reveal() {
    let css = card_style_css(CardReveal { opacity: 0.5, translate_y_px: 12.0, transition_delay_ms: 60 });
    assert_eq!(css, "opacity: 0.500; transform: translateY(12.0px); transition-delay: 60ms;");
}
