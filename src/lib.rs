//! Utilities for converting between Gregorian dates and the traditional
//! Chinese lunar calendar.
//!
//! Conversion relies on a packed year table covering lunar years 1900 to
//! 2100, i.e. Gregorian dates from 1900-01-31 to 2101-01-28. Dates outside
//! that span are reported as errors rather than guessed.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use nongli::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Lunar calendar:
//!
//! ```
//! use nongli::lunar::{self, LunarDate, Month::*};
//!
//! let date = lunar::solar_to_lunar(2017, 7, 23).unwrap();
//! assert_eq!(LunarDate { year: 2017, month: Leap(6), day: 1 }, date);
//! assert_eq!("丁酉年閏六月初一", lunar::fmt::lunar_date(&date));
//!
//! assert_eq!(Ok((2017, 7, 23)), lunar::lunar_to_solar(2017, 6, 1, true));
//! ```
//!
//! A leap flag on a month the year has no leap month for is rejected by
//! default; see [`config::LeapPolicy`] for the alternative.

pub mod config;
pub mod date;
pub mod error;
pub mod lunar;

pub use date::{Date, YearType};
pub use error::{Error, Result};
pub use lunar::{LunarDate, Month, lunar_to_solar, solar_to_lunar};
