use super::*;

#[test]
fn generate_button_can_fire_repeatedly() {
    let owner = Owner::new();
    owner.with(|| {
        let form = RwSignal::new(BatchColumnsForm::new());
        let alive = Alive::new();
        let generate = Callback::new({
            let alive = alive.clone();
            move |()| {
                start_generation(form, &alive);
            }
        });

        generate.run(());
        assert!(!form.with_untracked(BatchColumnsForm::is_generating));

        form.update(|f| f.prompt = "Key terms of the merger".to_owned());
        generate.run(());
        assert!(form.with_untracked(BatchColumnsForm::is_generating));

        // A second click while generating is a no-op.
        assert!(!start_generation(form, &alive));
        generate.run(());
        assert!(form.with_untracked(BatchColumnsForm::is_generating));
    });
}
