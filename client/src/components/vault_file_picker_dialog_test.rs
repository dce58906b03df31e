use super::*;

#[test]
fn row_and_checkbox_share_one_toggle() {
    let owner = Owner::new();
    owner.with(|| {
        let picker = RwSignal::new(VaultPicker::default());
        let id = "contract-1".to_owned();
        let toggle = move || toggle_file(picker, &id);
        let toggle_row = toggle.clone();

        toggle_row();
        assert!(picker.with_untracked(|p| p.selection.is_selected("contract-1")));
        toggle();
        assert!(!picker.with_untracked(|p| p.selection.is_selected("contract-1")));
    });
}
