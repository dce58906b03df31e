use super::*;

#[test]
fn hour_options_span_six_to_six() {
    let labels: Vec<String> = HourOfDay::options().map(|h| h.to_string()).collect();
    assert_eq!(labels.len(), 13);
    assert_eq!(labels.first().map(String::as_str), Some("6:00 AM"));
    assert_eq!(labels[6], "12:00 PM");
    assert_eq!(labels.last().map(String::as_str), Some("6:00 PM"));
    assert_eq!(HourOfDay::new(5), None);
    assert_eq!(HourOfDay::new(19), None);
}

#[test]
fn schedule_defaults() {
    let schedule = MonitorSchedule::default();
    assert_eq!(schedule.frequency, Frequency::Weekly);
    assert_eq!(schedule.hour.to_string(), "8:00 AM");
    assert_eq!(schedule.day, Weekday::Sunday);
    assert_eq!(schedule.source.label(), "Vault");
    assert_eq!(schedule.extraction, ExtractionMode::New);
    assert!(schedule.email_updates);
    assert!(schedule.notifications);
}

#[test]
fn monitor_lifecycle_drives_button_state() {
    let mut monitor = Monitor::default();
    assert_eq!(monitor.primary_label(), "Create monitor");
    assert!(!monitor.can_remove());

    let schedule = MonitorSchedule {
        frequency: Frequency::Daily,
        source: SourceLocation::IManage,
        ..MonitorSchedule::default()
    };
    monitor.save(schedule.clone());
    assert_eq!(monitor.primary_label(), "Update monitor");
    assert!(monitor.can_remove());
    assert_eq!(monitor.draft(), schedule);

    monitor.remove();
    assert!(!monitor.is_active());
    assert_eq!(monitor.draft(), MonitorSchedule::default());
}

#[test]
fn option_lists() {
    assert_eq!(Weekday::ALL.len(), 7);
    let sources: Vec<_> = SourceLocation::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(sources, vec!["Vault", "iManage", "SharePoint", "Google Drive"]);
}
