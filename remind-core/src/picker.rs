//! Date/time chooser used to confirm a draft's due time.

use chrono::{Duration, Months, NaiveDateTime, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerField {
    Year,
    Month,
    #[default]
    Day,
    Hour,
    Minute,
}

impl PickerField {
    fn next(self) -> Self {
        match self {
            Self::Year => Self::Month,
            Self::Month => Self::Day,
            Self::Day => Self::Hour,
            Self::Hour => Self::Minute,
            Self::Minute => Self::Year,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Year => Self::Minute,
            Self::Month => Self::Year,
            Self::Day => Self::Month,
            Self::Hour => Self::Day,
            Self::Minute => Self::Hour,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    value: NaiveDateTime,
    field: PickerField,
    minute_step: u32,
}

impl DatePicker {
    pub fn new(initial: NaiveDateTime, minute_step: u32) -> Self {
        Self {
            value: truncate_to_minute(initial),
            field: PickerField::default(),
            minute_step: minute_step.clamp(1, 60),
        }
    }

    /// Starts at `now` rounded up to the next multiple of the minute step.
    pub fn starting_at(now: NaiveDateTime, minute_step: u32) -> Self {
        let step = minute_step.clamp(1, 60);
        let base = truncate_to_minute(now);
        let rem = base.minute() % step;
        let value = if rem == 0 {
            base
        } else {
            base + Duration::minutes(i64::from(step - rem))
        };
        Self::new(value, step)
    }

    pub fn value(&self) -> NaiveDateTime {
        self.value
    }

    pub fn field(&self) -> PickerField {
        self.field
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    pub fn increment(&mut self) {
        self.adjust(1);
    }

    pub fn decrement(&mut self) {
        self.adjust(-1);
    }

    // Month and year moves clamp the day; smaller units carry over.
    fn adjust(&mut self, delta: i32) {
        let v = self.value;
        let next = match self.field {
            PickerField::Year => shift_months(v, delta * 12),
            PickerField::Month => shift_months(v, delta),
            PickerField::Day => v.checked_add_signed(Duration::days(delta.into())),
            PickerField::Hour => v.checked_add_signed(Duration::hours(delta.into())),
            PickerField::Minute => v.checked_add_signed(Duration::minutes(
                i64::from(delta) * i64::from(self.minute_step),
            )),
        };
        if let Some(next) = next {
            self.value = next;
        }
    }
}

fn shift_months(v: NaiveDateTime, months: i32) -> Option<NaiveDateTime> {
    let amount = Months::new(months.unsigned_abs());
    if months >= 0 {
        v.checked_add_months(amount)
    } else {
        v.checked_sub_months(amount)
    }
}

fn truncate_to_minute(v: NaiveDateTime) -> NaiveDateTime {
    v.with_second(0)
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn picker_on(field: PickerField, value: NaiveDateTime) -> DatePicker {
        let mut picker = DatePicker::new(value, 5);
        while picker.field() != field {
            picker.next_field();
        }
        picker
    }

    #[test]
    fn starting_value_rounds_up_to_step() {
        let now = dt(2026, 10, 15, 10, 52).with_second(13).unwrap();
        assert_eq!(DatePicker::starting_at(now, 5).value(), dt(2026, 10, 15, 10, 55));
        assert_eq!(
            DatePicker::starting_at(dt(2026, 10, 15, 23, 58), 5).value(),
            dt(2026, 10, 16, 0, 0)
        );
        assert_eq!(
            DatePicker::starting_at(dt(2026, 10, 15, 9, 30), 15).value(),
            dt(2026, 10, 15, 9, 30)
        );
    }

    #[test]
    fn month_change_clamps_day() {
        let mut picker = picker_on(PickerField::Month, dt(2026, 1, 31, 9, 0));
        picker.increment();
        assert_eq!(picker.value(), dt(2026, 2, 28, 9, 0));
    }

    #[test]
    fn year_change_from_leap_day() {
        let mut picker = picker_on(PickerField::Year, dt(2028, 2, 29, 9, 0));
        picker.decrement();
        assert_eq!(picker.value(), dt(2027, 2, 28, 9, 0));
    }

    #[test]
    fn day_hour_minute_carry() {
        let mut picker = picker_on(PickerField::Day, dt(2026, 1, 31, 23, 55));
        picker.increment();
        assert_eq!(picker.value(), dt(2026, 2, 1, 23, 55));

        let mut picker = picker_on(PickerField::Hour, dt(2026, 1, 31, 23, 55));
        picker.increment();
        assert_eq!(picker.value(), dt(2026, 2, 1, 0, 55));

        let mut picker = picker_on(PickerField::Minute, dt(2026, 1, 31, 23, 55));
        picker.increment();
        assert_eq!(picker.value(), dt(2026, 2, 1, 0, 0));
        picker.decrement();
        picker.decrement();
        assert_eq!(picker.value(), dt(2026, 1, 31, 23, 50));
    }

    #[test]
    fn fields_cycle_both_ways() {
        let mut picker = DatePicker::new(dt(2026, 1, 1, 0, 0), 5);
        assert_eq!(picker.field(), PickerField::Day);
        picker.prev_field();
        picker.prev_field();
        assert_eq!(picker.field(), PickerField::Year);
        picker.prev_field();
        assert_eq!(picker.field(), PickerField::Minute);
        picker.next_field();
        assert_eq!(picker.field(), PickerField::Year);
    }
}
