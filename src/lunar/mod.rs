//! Chinese lunar calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序依打包年表（見 [`table`]）換算公曆與農曆，支持農曆 1900 至 2100 年，
//! 即公曆 1900-01-31 至 2101-01-28。

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::{Config, LeapPolicy};
use crate::date::Date;
use crate::error::{Error, Result};

pub mod fmt;
pub mod table;

pub use table::{MAX_YEAR, MIN_YEAR, YearInfo};

/// 起算日：公曆 1900-01-31，即農曆 1900 年正月初一的儒略日數。
pub const EPOCH_JDN: u32 = 2415051;

/// 月名，`Common` 為平月，`Leap` 為閏月。
///
/// 排序依月序號，同序號的閏月排在平月之後。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 依序號與平閏構造月名。
    pub fn new(num: u32, is_leap: bool) -> Self {
        if is_leap { Month::Leap(num) } else { Month::Common(num) }
    }
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，十一、十二月稱「冬月」「臘月」。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}
impl Ord for Month {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.num(), self.is_leap()).cmp(&(other.num(), other.is_leap()))
    }
}
impl PartialOrd for Month {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 農曆日期。
///
/// 序列化為 `{"year", "month", "day", "is_leap"}` 四個字段。
///
/// # 用例
///
/// ```
/// use nongli::lunar::{LunarDate, Month::*};
///
/// let date = LunarDate::new(2017, 6, 1, true);
/// assert_eq!(Leap(6), date.month);
/// assert_eq!("2017-06L-01", date.to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(from = "RawLunarDate", into = "RawLunarDate")]
pub struct LunarDate {
    /// 年，以正月為首
    pub year: i32,
    /// 月
    pub month: Month,
    /// 日，`1..=30`
    pub day: u32,
}

#[derive(Serialize, Deserialize)]
struct RawLunarDate {
    year: i32,
    month: u32,
    day: u32,
    is_leap: bool,
}

impl From<RawLunarDate> for LunarDate {
    fn from(raw: RawLunarDate) -> Self {
        LunarDate::new(raw.year, raw.month, raw.day, raw.is_leap)
    }
}
impl From<LunarDate> for RawLunarDate {
    fn from(date: LunarDate) -> Self {
        RawLunarDate {
            year: date.year,
            month: date.month.num(),
            day: date.day,
            is_leap: date.is_leap(),
        }
    }
}

impl LunarDate {
    /// 構造農曆日期，不作檢查；換算時方驗證是否存在。
    pub fn new(year: i32, month: u32, day: u32, is_leap: bool) -> Self {
        LunarDate {
            year,
            month: Month::new(month, is_leap),
            day,
        }
    }
    /// 月序號，無論平閏。
    pub fn month_num(&self) -> u32 {
        self.month.num()
    }
    /// 是否在閏月。
    pub fn is_leap(&self) -> bool {
        self.month.is_leap()
    }
    /// 該年的干支序號，見 [`sexagenary_for_year`]。
    pub fn sexagenary_year(&self) -> u32 {
        sexagenary_for_year(self.year)
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}{}-{:02}",
            self.year,
            self.month.num(),
            if self.is_leap() { "L" } else { "" },
            self.day
        )
    }
}

/// 公曆、農曆換算器。
///
/// 無狀態，僅記錄設定；見 [`Config`]。
///
/// # 用例
///
/// ```
/// use nongli::config::{Config, LeapPolicy};
/// use nongli::lunar::Converter;
///
/// let strict = Converter::default();
/// assert!(strict.lunar_to_solar(2018, 6, 1, true).is_err());
///
/// let lenient = Converter::new(Config { leap_policy: LeapPolicy::Lenient });
/// assert_eq!(Ok((2018, 7, 13)), lenient.lunar_to_solar(2018, 6, 1, true));
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Converter {
    config: Config,
}

impl Converter {
    /// 依給定設定構造換算器。
    pub fn new(config: Config) -> Self {
        Converter { config }
    }

    /// 當前設定。
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 公曆轉農曆，參數為公曆年月日。
    ///
    /// 公曆欄位不合法時回報 [`Error::InvalidCalendarField`]，日期在年表之外時回報
    /// [`Error::OutOfRangeYear`]。
    pub fn solar_to_lunar(&self, year: i32, month: i32, day: i32) -> Result<LunarDate> {
        let date = Date::from_gregorian(year, month, day).map_err(|e| match e {
            // [`Date`] 亦無法表示，必在年表之外
            Error::OutOfRangeYear(y) if y < MIN_YEAR => Error::OutOfRangeYear(MIN_YEAR - 1),
            Error::OutOfRangeYear(_) => Error::OutOfRangeYear(MAX_YEAR + 1),
            e => e,
        })?;
        self.to_lunar(date)
    }

    /// 取得給定日期的農曆日期。
    ///
    /// 日期在年表之前回報 `OutOfRangeYear(1899)`，在年表之後回報
    /// `OutOfRangeYear(2101)`，見 [`Error::OutOfRangeYear`]。
    pub fn to_lunar(&self, date: Date) -> Result<LunarDate> {
        let offset = date - Date::from_jdn(EPOCH_JDN);
        if offset < 0 {
            debug!(date = %date.iso_gregorian(), "date precedes the lunar table");
            return Err(Error::OutOfRangeYear(MIN_YEAR - 1));
        }
        let Ok(mut offset) = u32::try_from(offset) else {
            debug!(date = %date.iso_gregorian(), "date follows the lunar table");
            return Err(Error::OutOfRangeYear(MAX_YEAR + 1));
        };

        let mut year = MIN_YEAR;
        let info = loop {
            let info = YearInfo::get(year).inspect_err(|_| {
                debug!(date = %date.iso_gregorian(), "date follows the lunar table");
            })?;
            let days = info.days();
            if offset < days {
                break info;
            }
            offset -= days;
            year += 1;
        };

        for (month, days) in info.months() {
            if offset < days {
                let lunar = LunarDate {
                    year,
                    month,
                    day: offset + 1,
                };
                trace!(date = %date.iso_gregorian(), %lunar, "solar to lunar");
                return Ok(lunar);
            }
            offset -= days;
        }
        panic!("incorrect data for lunar year {year}");
    }

    /// 農曆轉公曆，返回 `(年, 月, 日)`。
    ///
    /// `is_leap_month` 指明所給月份是否為閏月；該年並無此閏月時依
    /// [`LeapPolicy`] 處理。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::lunar::Converter;
    ///
    /// let conv = Converter::default();
    /// assert_eq!(Ok((2017, 7, 23)), conv.lunar_to_solar(2017, 6, 1, true));
    /// assert_eq!(Ok((2017, 6, 24)), conv.lunar_to_solar(2017, 6, 1, false));
    /// ```
    pub fn lunar_to_solar(
        &self,
        year: i32,
        month: u32,
        day: u32,
        is_leap_month: bool,
    ) -> Result<(i32, i32, i32)> {
        self.to_solar(&LunarDate::new(year, month, day, is_leap_month))
            .map(|date| date.gregorian())
    }

    /// 取得給定農曆日期的 [`Date`]。
    pub fn to_solar(&self, lunar: &LunarDate) -> Result<Date> {
        let info = YearInfo::get(lunar.year)?;
        let month = self.resolve_month(&info, lunar.month)?;
        let days = info.days_in(month)?;
        if !(1..=days).contains(&lunar.day) {
            debug!(%lunar, days, "day outside lunar month");
            return Err(Error::day(lunar.day));
        }

        let mut offset = (MIN_YEAR..lunar.year)
            .map(|y| YearInfo::get(y).map(|info| info.days()))
            .sum::<Result<u32>>()?;
        offset += info
            .months()
            .take_while(|&(m, _)| m != month)
            .map(|(_, days)| days)
            .sum::<u32>();
        offset += lunar.day - 1;

        let date = Date::from_jdn(EPOCH_JDN + offset);
        trace!(%lunar, date = %date.iso_gregorian(), "lunar to solar");
        Ok(date)
    }

    /// 核對閏月請求。
    fn resolve_month(&self, info: &YearInfo, month: Month) -> Result<Month> {
        let Month::Leap(m) = month else {
            return Ok(month);
        };
        if !(1..=12).contains(&m) || info.leap_month() == Some(m) {
            return Ok(month);
        }
        match self.config.leap_policy {
            LeapPolicy::Strict => {
                debug!(year = info.year, month = m, "no such leap month");
                Err(Error::InconsistentLeapRequest {
                    year: info.year,
                    month: m,
                    leap_month: info.leap_month(),
                })
            }
            LeapPolicy::Lenient => {
                warn!(
                    year = info.year,
                    month = m,
                    "no such leap month, using the common month instead"
                );
                Ok(Month::Common(m))
            }
        }
    }
}

/// 公曆轉農曆，採用預設設定。
///
/// # 用例
///
/// ```
/// use nongli::lunar::{solar_to_lunar, LunarDate};
///
/// assert_eq!(Ok(LunarDate::new(1999, 11, 25, false)), solar_to_lunar(2000, 1, 1));
/// ```
pub fn solar_to_lunar(year: i32, month: i32, day: i32) -> Result<LunarDate> {
    Converter::default().solar_to_lunar(year, month, day)
}

/// 農曆轉公曆，採用預設設定，即拒絕不存在的閏月。
///
/// # 用例
///
/// ```
/// use nongli::lunar::lunar_to_solar;
///
/// assert_eq!(Ok((2000, 1, 1)), lunar_to_solar(1999, 11, 25, false));
/// ```
pub fn lunar_to_solar(year: i32, month: u32, day: u32, is_leap_month: bool) -> Result<(i32, i32, i32)> {
    Converter::default().lunar_to_solar(year, month, day, is_leap_month)
}

/// 取得所給公元年的干支。
///
/// # 用例
///
/// ```
/// use nongli::lunar::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(1984)); // 甲子
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;
    use Month::*;

    fn lunar(year: i32, month: Month, day: u32) -> LunarDate {
        LunarDate { year, month, day }
    }

    #[test]
    fn epoch() {
        assert_eq!(Ok(lunar(1900, Common(1), 1)), solar_to_lunar(1900, 1, 31));
        assert_eq!(Ok((1900, 1, 31)), lunar_to_solar(1900, 1, 1, false));
        assert_eq!(EPOCH_JDN, Date::from_gregorian(1900, 1, 31).unwrap().jdn());
    }

    #[test]
    fn dates() {
        let data = [
            ((1900, 12, 31), lunar(1900, Common(11), 10)),
            ((1968, 1, 30), lunar(1968, Common(1), 1)),
            ((1976, 9, 23), lunar(1976, Common(8), 30)),
            ((1985, 2, 20), lunar(1985, Common(1), 1)),
            ((2000, 1, 1), lunar(1999, Common(11), 25)),
            ((2001, 1, 24), lunar(2001, Common(1), 1)),
            ((2017, 7, 22), lunar(2017, Common(6), 29)),
            ((2017, 7, 23), lunar(2017, Leap(6), 1)),
            ((2020, 5, 23), lunar(2020, Leap(4), 1)),
            ((2020, 6, 20), lunar(2020, Leap(4), 29)),
            ((2020, 6, 21), lunar(2020, Common(5), 1)),
            ((2023, 1, 22), lunar(2023, Common(1), 1)),
            ((2024, 2, 10), lunar(2024, Common(1), 1)),
            ((2033, 12, 22), lunar(2033, Leap(11), 1)),
            ((2034, 1, 19), lunar(2033, Leap(11), 29)),
            ((2034, 1, 20), lunar(2033, Common(12), 1)),
            ((2099, 12, 31), lunar(2099, Common(11), 20)),
            ((2101, 1, 28), lunar(2100, Common(12), 29)),
        ];
        for ((y, m, d), std) in data {
            assert_eq!(Ok(std), solar_to_lunar(y, m, d), "{y:04}-{m:02}-{d:02}");
            assert_eq!(
                Ok((y, m, d)),
                lunar_to_solar(std.year, std.month_num(), std.day, std.is_leap()),
                "{std}"
            );
        }
    }

    #[test]
    fn lunar_new_year() {
        for (year, (m, d)) in [
            (1954, (2, 3)),
            (2018, (2, 16)),
            (2019, (2, 5)),
            (2027, (2, 6)),
            (2030, (2, 3)),
        ] {
            assert_eq!(Ok((year, m, d)), lunar_to_solar(year, 1, 1, false), "{year}");
        }
    }

    #[test]
    fn range() {
        use Error::*;
        assert_eq!(Err(OutOfRangeYear(1899)), solar_to_lunar(1900, 1, 30));
        assert_eq!(Err(OutOfRangeYear(1899)), solar_to_lunar(1850, 6, 1));
        assert_eq!(Err(OutOfRangeYear(2101)), solar_to_lunar(2101, 1, 29));
        assert_eq!(Err(OutOfRangeYear(2101)), solar_to_lunar(2200, 1, 1));
        // 儒略日數超出 i32 範圍
        for year in [5_874_898, 5_874_899, 5_874_909, 6_000_000, 11_000_000] {
            assert_eq!(Err(OutOfRangeYear(2101)), solar_to_lunar(year, 6, 1), "{year}");
        }
        // [`Date`] 無法表示
        assert_eq!(Err(OutOfRangeYear(2101)), solar_to_lunar(i32::MAX, 12, 31));
        assert_eq!(Err(OutOfRangeYear(1899)), solar_to_lunar(i32::MIN, 1, 1));
        let conv = Converter::default();
        assert_eq!(Err(OutOfRangeYear(2101)), conv.to_lunar(Date::from_jdn(u32::MAX)));
        assert_eq!(Err(OutOfRangeYear(1899)), conv.to_lunar(Date::from_jdn(0)));
        assert_eq!(Err(OutOfRangeYear(1899)), lunar_to_solar(1899, 12, 1, false));
        assert_eq!(Err(OutOfRangeYear(2101)), lunar_to_solar(2101, 1, 1, false));
    }

    #[test]
    fn invalid_fields() {
        let month = |value| Error::InvalidCalendarField {
            field: Field::Month,
            value,
        };
        let day = |value| Error::InvalidCalendarField {
            field: Field::Day,
            value,
        };
        assert_eq!(Err(month(13)), solar_to_lunar(2000, 13, 1));
        assert_eq!(Err(day(30)), solar_to_lunar(2023, 2, 30));
        assert_eq!(Err(month(0)), lunar_to_solar(2000, 0, 1, false));
        assert_eq!(Err(month(13)), lunar_to_solar(2000, 13, 1, false));
        assert_eq!(Err(month(13)), lunar_to_solar(2000, 13, 1, true));
        assert_eq!(Err(day(0)), lunar_to_solar(2000, 1, 0, false));
        // 2017 年六月小，閏六月大
        assert_eq!(Err(day(30)), lunar_to_solar(2017, 6, 30, false));
        assert_eq!(Ok((2017, 8, 21)), lunar_to_solar(2017, 6, 30, true));
        assert_eq!(Err(day(31)), lunar_to_solar(2017, 6, 31, true));
    }

    #[test]
    fn strict_leap_policy() {
        let conv = Converter::default();
        assert_eq!(LeapPolicy::Strict, conv.config().leap_policy);
        assert_eq!(
            Err(Error::InconsistentLeapRequest {
                year: 2018,
                month: 6,
                leap_month: None,
            }),
            conv.lunar_to_solar(2018, 6, 1, true)
        );
        assert_eq!(
            Err(Error::InconsistentLeapRequest {
                year: 2017,
                month: 5,
                leap_month: Some(6),
            }),
            conv.lunar_to_solar(2017, 5, 1, true)
        );
        assert_eq!(Ok((2023, 3, 22)), conv.lunar_to_solar(2023, 2, 1, true));
    }

    #[test]
    fn lenient_leap_policy() {
        let conv = Converter::new(Config {
            leap_policy: LeapPolicy::Lenient,
        });
        assert_eq!(Ok((2018, 7, 13)), conv.lunar_to_solar(2018, 6, 1, true));
        assert_eq!(
            conv.lunar_to_solar(2017, 5, 1, false),
            conv.lunar_to_solar(2017, 5, 1, true)
        );
        // 真正的閏月不受影響
        assert_eq!(Ok((2023, 3, 22)), conv.lunar_to_solar(2023, 2, 1, true));
        assert_eq!(Ok((2023, 4, 20)), conv.lunar_to_solar(2023, 3, 1, false));
        // 日數依平月核對，2018 年六月小
        assert_eq!(Err(Error::day(30u32)), conv.lunar_to_solar(2018, 6, 30, true));
    }

    /// 逐日走遍年表，核對往返、閏月、單調與月大小。
    #[test]
    fn whole_table() {
        let conv = Converter::default();
        let first = Date::from_jdn(EPOCH_JDN);
        let last = Date::from_gregorian(2101, 1, 28).unwrap();

        let mut prev: Option<LunarDate> = None;
        let mut date = first;
        while date <= last {
            let lunar = conv.to_lunar(date).unwrap();
            let info = YearInfo::get(lunar.year).unwrap();

            assert_eq!(Ok(date), conv.to_solar(&lunar), "{}", date.iso_gregorian());

            if lunar.is_leap() {
                assert_eq!(info.leap_month(), Some(lunar.month_num()), "{lunar}");
            }
            assert!(lunar.day >= 1 && lunar.day <= 30, "{lunar}");
            assert!(lunar.day <= info.days_in(lunar.month).unwrap(), "{lunar}");

            if let Some(prev) = prev {
                assert!(prev < lunar, "{prev} !< {lunar}");
                if prev.year == lunar.year && prev.month == lunar.month {
                    assert_eq!(prev.day + 1, lunar.day, "{lunar}");
                } else {
                    assert_eq!(1, lunar.day, "{lunar}");
                }
            }
            prev = Some(lunar);
            date = date + 1;
        }
        assert_eq!(Some(lunar(MAX_YEAR, Common(12), 29)), prev);
    }

    #[test]
    fn month_order() {
        assert!(Common(6) < Leap(6));
        assert!(Leap(6) < Common(7));
        assert!(Leap(5) < Common(6));
        assert!(lunar(2017, Leap(6), 1) < lunar(2017, Common(7), 1));
        assert!(lunar(2016, Common(12), 30) < lunar(2017, Common(1), 1));
    }

    #[test]
    fn display() {
        assert_eq!("1999-11-25", lunar(1999, Common(11), 25).to_string());
        assert_eq!("2033-11L-01", lunar(2033, Leap(11), 1).to_string());
    }

    #[test]
    fn serde_shape() {
        let date = lunar(2017, Leap(6), 1);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(r#"{"year":2017,"month":6,"day":1,"is_leap":true}"#, json);
        assert_eq!(date, serde_json::from_str::<LunarDate>(&json).unwrap());
    }

    #[test]
    fn year_sexagenary() {
        for (std, year) in [(60, -2697), (1, -2696), (17, 2000), (34, 2017)] {
            assert_eq!(std, sexagenary_for_year(year));
        }
        assert_eq!(34, lunar(2017, Leap(6), 1).sexagenary_year());
    }
}
