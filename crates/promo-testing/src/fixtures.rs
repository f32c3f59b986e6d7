//! Sample campaigns used across integration tests.

use chrono::NaiveDate;
use promo_runtime::Board;
use promo_types::{CampaignFlags, CampaignId, CampaignRow, Cpm, Dollars, Speed, Targeting};

pub const LINK_ID: &str = "t3_abc";

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Unpaid sitewide campaign: $50 over 5/1/2013 to 5/4/2013 at $2.50 CPM.
pub fn sample_row(id: u64) -> CampaignRow {
    CampaignRow {
        id: CampaignId::from_number(id),
        start_date: date(2013, 5, 1),
        end_date: date(2013, 5, 4),
        duration: 3,
        bid: Dollars::new(50.0).expect("valid fixture bid"),
        spent: None,
        cpm: Cpm::from_cents(250).expect("valid fixture cpm"),
        speed: Speed::default(),
        targeting: Targeting::Sitewide,
        flags: CampaignFlags::default(),
        free_requested: false,
    }
}

pub fn row_with_flags(id: u64, flags: CampaignFlags) -> CampaignRow {
    CampaignRow {
        flags,
        ..sample_row(id)
    }
}

pub fn targeted_row(id: u64, subreddit: &str) -> CampaignRow {
    CampaignRow {
        targeting: Targeting::Subreddit(subreddit.to_string()),
        ..sample_row(id)
    }
}

pub fn live_paid_flags() -> CampaignFlags {
    CampaignFlags {
        live: true,
        paid: true,
        view_live_url: Some("https://example.com/live/abc".to_string()),
        ..Default::default()
    }
}

pub fn sponsor_flags() -> CampaignFlags {
    CampaignFlags {
        sponsor: true,
        ..Default::default()
    }
}

/// Board with `count` unpaid sample rows numbered from 1.
pub fn sample_board(count: u64) -> Board {
    Board {
        link_id: LINK_ID.to_string(),
        rows: (1..=count).map(sample_row).collect(),
    }
}
