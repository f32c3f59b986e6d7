//! Table Manager Flow Tests
//!
//! Drive the table and form together the way the page does and check the
//! transitions, backend requests and the single edit session.

use promo_engine::{BidPolicy, RowAction};
use promo_runtime::{
    CampaignTable, CreateOutcome, Element, FormController, FormPlacement, Result, Step,
    TransitionRunner,
};
use promo_testing::doubles::BackendCall;
use promo_testing::fixtures::{LINK_ID, row_with_flags, sample_row, sponsor_flags};
use promo_testing::{RecordingBackend, RecordingSurface};
use promo_types::{CampaignId, Cpm, Dollars};

fn form() -> FormController {
    let policy = BidPolicy {
        min_bid: Dollars::new(20.0).unwrap(),
        min_daily_bid: Dollars::new(5.0).unwrap(),
        targeted_multiplier: 1.5,
    };
    FormController::new(policy, Cpm::from_cents(125).unwrap())
}

fn id(n: u64) -> CampaignId {
    CampaignId::from_number(n)
}

fn table(rows: u64, max: usize) -> CampaignTable {
    CampaignTable::from_rows(LINK_ID, max, (1..=rows).map(sample_row))
}

#[test]
fn test_editing_second_row_closes_first() -> Result<()> {
    let mut table = table(2, 5);
    let mut form = form();

    table.edit(&id(1), &mut form)?;
    let transition = table.edit(&id(2), &mut form)?;

    // the first row comes back before the form moves
    let steps = transition.steps();
    let restore = steps
        .iter()
        .position(|s| *s == Step::FadeIn { target: Element::Row(id(1)) })
        .unwrap();
    let staging = steps
        .iter()
        .position(|s| *s == Step::InsertStagingRow { after: id(2) })
        .unwrap();
    assert!(restore < staging);

    assert_eq!(table.placement(), &FormPlacement::Inline { row: id(2) });
    assert!(!table.row(&id(1)).unwrap().hidden);
    assert!(table.row(&id(2)).unwrap().hidden);
    assert_eq!(table.session().unwrap().row(), &id(2));
    Ok(())
}

#[test]
fn test_create_while_editing_cancels_edit() -> Result<()> {
    let mut table = table(1, 5);
    let mut form = form();
    table.edit(&id(1), &mut form)?;

    let CreateOutcome::Opened(transition) = table.create(&mut form) else {
        panic!("expected the form to open");
    };

    assert!(transition.steps().contains(&Step::RemoveStagingRow));
    assert_eq!(table.placement(), &FormPlacement::Standalone);
    assert!(table.session().is_none());
    assert!(form.fields().campaign_id.is_none());
    Ok(())
}

#[test]
fn test_create_at_limit_shows_error() {
    let mut table = table(3, 3);

    let CreateOutcome::LimitReached { limit, transition } = table.create(&mut form()) else {
        panic!("expected the limit to be reached");
    };

    assert_eq!(limit.count, 3);
    assert_eq!(
        transition.steps(),
        &[
            Step::FadeIn { target: Element::TooManyCampaignsError },
            Step::Disable { target: Element::NewCampaignButton },
        ]
    );
    assert_eq!(table.placement(), &FormPlacement::Hidden);
}

#[test]
fn test_delete_sends_one_request_with_link_id() -> Result<()> {
    let mut table = table(3, 3);
    let backend = RecordingBackend::new();

    let transition = table.delete(&id(2), &backend)?;

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, BackendCall::Delete);
    assert_eq!(calls[0].1.campaign_id36, id(2));
    assert_eq!(calls[0].1.link_id, LINK_ID);

    assert!(transition.steps().contains(&Step::RemoveRow { id: id(2) }));
    // back under the limit
    assert!(transition.steps().contains(&Step::Enable { target: Element::NewCampaignButton }));
    assert_eq!(table.len(), 2);
    Ok(())
}

#[test]
fn test_delete_of_edited_row_closes_form() -> Result<()> {
    let mut table = table(2, 5);
    let mut form = form();
    table.edit(&id(1), &mut form)?;

    let transition = table.delete(&id(1), &RecordingBackend::new())?;

    assert_eq!(transition.steps().first(), Some(&Step::FadeOut { target: Element::Form }));
    assert!(table.session().is_none());
    Ok(())
}

#[test]
fn test_free_request_fades_control_once() -> Result<()> {
    let mut table = CampaignTable::from_rows(LINK_ID, 5, vec![row_with_flags(1, sponsor_flags())]);
    let backend = RecordingBackend::new();

    let transition = table.free(&id(1), &backend)?;

    assert_eq!(
        transition.steps(),
        &[Step::FadeOut { target: Element::FreeControl(id(1)) }]
    );
    assert_eq!(backend.count(BackendCall::Free), 1);
    assert!(!table.row(&id(1)).unwrap().allows(RowAction::Free));
    assert!(table.free(&id(1), &backend).is_err());
    assert_eq!(backend.count(BackendCall::Free), 1);
    Ok(())
}

#[test]
fn test_new_campaign_transition_runs_with_single_done() -> Result<()> {
    let mut table = table(0, 5);
    let mut form = form();
    let CreateOutcome::Opened(_) = table.create(&mut form) else {
        panic!("expected the form to open");
    };

    form.set_start_date("5/1/2013");
    form.set_end_date("5/4/2013");
    form.set_bid("50");
    assert!(form.revalidate());
    let row = form.build_row(Some(id(1)), Default::default())?;

    let transition = table.new_campaign(row)?;
    let mut surface = RecordingSurface::new();
    let completed = TransitionRunner::run(&transition, &mut surface)?;

    assert_eq!(completed.steps, surface.steps.len());
    assert_eq!(surface.done_calls, 1);
    assert!(surface.steps.contains(&Step::InsertRow { id: id(1) }));
    assert!(table.row(&id(1)).unwrap().allows(RowAction::Pay));
    Ok(())
}
