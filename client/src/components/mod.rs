//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the picker chrome. Navigation and timezone state come
//! from the `CalendarState` context; the table owns the week selection.

pub mod calendar_row;
pub mod calendar_table;
pub mod date_display;
pub mod timezone_selector;
pub mod week_selector;
