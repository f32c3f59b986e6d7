//! Every combination of the four boolean row flags, checked against the
//! rules the table relies on.

use promo_engine::{PriceControl, RowAction, controls_for, css_class};
use promo_types::CampaignFlags;

fn all_flags() -> Vec<CampaignFlags> {
    (0u8..32)
        .map(|bits| CampaignFlags {
            free: bits & 1 != 0,
            live: bits & 2 != 0,
            complete: bits & 4 != 0,
            paid: bits & 8 != 0,
            sponsor: bits & 16 != 0,
            ..Default::default()
        })
        .collect()
}

#[test]
fn test_live_rows_lead_with_view_live() {
    for flags in all_flags() {
        let controls = controls_for(&flags);
        assert_eq!(
            controls.actions.first() == Some(&RowAction::ViewLive),
            flags.live,
            "{:?}",
            flags
        );
    }
}

#[test]
fn test_complete_rows_are_settled() {
    for flags in all_flags().into_iter().filter(|f| f.complete) {
        let controls = controls_for(&flags);
        assert_eq!(controls.price, PriceControl::Settled);
        assert!(!controls.allows(RowAction::Delete));
        assert!(!controls.allows(RowAction::Pay));
        assert_eq!(controls.allows(RowAction::Edit), flags.sponsor);
        assert_eq!(controls.info.as_deref(), Some("complete/live"));
    }
}

#[test]
fn test_pending_rows_can_always_be_edited_and_deleted() {
    for flags in all_flags().into_iter().filter(|f| !f.complete) {
        let controls = controls_for(&flags);
        assert!(controls.allows(RowAction::Edit), "{:?}", flags);
        assert!(controls.allows(RowAction::Delete), "{:?}", flags);
        assert!(controls.info.is_none());
    }
}

#[test]
fn test_free_button_only_for_sponsors_not_yet_free() {
    for flags in all_flags().into_iter().filter(|f| !f.complete) {
        let controls = controls_for(&flags);
        let expected = flags.sponsor && !flags.free;
        assert_eq!(
            controls.price == PriceControl::FreeButton,
            expected,
            "{:?}",
            flags
        );
    }
}

#[test]
fn test_css_class_always_starts_with_row_class() {
    for flags in all_flags() {
        let class = css_class(&flags);
        assert!(class.starts_with("campaign-row"));
        assert_eq!(class.contains(" paid"), flags.paid && !flags.complete);
    }
}
