use crate::form::FormFields;
use crate::{Error, Result};
use chrono::NaiveDate;
use promo_engine::dates::date_from_input;
use promo_types::{MS_PER_DAY, format_form_date, parse_form_date};

type OnSelect<'a> = Box<dyn FnMut(NaiveDate) + 'a>;

/// Date selection popup attached to one input.
///
/// Bounds are read once, at attach time, from other fields plus an optional
/// offset, the same way the popup is built on first focus.
pub struct DatePicker<'a> {
    value: String,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
    on_select: Option<OnSelect<'a>>,
}

impl<'a> DatePicker<'a> {
    pub fn attach(
        input: &str,
        min_source: Option<&str>,
        max_source: Option<&str>,
        on_select: Option<OnSelect<'a>>,
        min_date_offset_ms: i64,
    ) -> Self {
        Self {
            value: input.to_string(),
            min: min_source
                .and_then(|src| date_from_input(src, min_date_offset_ms))
                .map(|dt| dt.date()),
            max: max_source
                .and_then(|src| date_from_input(src, 0))
                .map(|dt| dt.date()),
            on_select,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn default_date(&self) -> Option<NaiveDate> {
        parse_form_date(&self.value).ok()
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.max
    }

    pub fn allows(&self, date: NaiveDate) -> bool {
        self.min.is_none_or(|min| date >= min) && self.max.is_none_or(|max| date <= max)
    }

    /// Pick `date`, write it back to the input and fire the callback.
    pub fn select(&mut self, date: NaiveDate) -> Result<&str> {
        if !self.allows(date) {
            return Err(Error::InvalidOperation(format!(
                "{} is outside the selectable range",
                format_form_date(date)
            )));
        }
        self.value = format_form_date(date);
        if let Some(callback) = self.on_select.as_mut() {
            callback(date);
        }
        Ok(&self.value)
    }
}

/// Start date picker: no earlier than `today`.
pub fn start_date_picker<'a>(
    fields: &FormFields,
    today: NaiveDate,
    on_select: Option<OnSelect<'a>>,
) -> DatePicker<'a> {
    let today = format_form_date(today);
    DatePicker::attach(&fields.start_date, Some(&today), None, on_select, 0)
}

/// End date picker: at least one day after the current start date.
pub fn end_date_picker<'a>(fields: &FormFields, on_select: Option<OnSelect<'a>>) -> DatePicker<'a> {
    DatePicker::attach(
        &fields.end_date,
        Some(&fields.start_date),
        None,
        on_select,
        MS_PER_DAY,
    )
}
