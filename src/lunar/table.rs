//! 年表
//!
//! 每歲以一個整數打包記錄月大小與閏月，位元分佈如下：
//!
//! - 第 0–3 位：閏月序號，`0` 為無閏月，`1..=12` 表示閏在該月之後
//! - 第 4–15 位：正月至十二月的大小，第 `m` 月取 `0x10000 >> m`，`1` 為大月（30 日），`0` 為小月（29 日）
//! - 第 16 位：閏月大小，意義同上
//!
//! 數據為傳統推算結果，須逐字保留，不可改動。

use super::Month;
use crate::error::{Error, Result};

/// 年表首年
pub const MIN_YEAR: i32 = 1900;
/// 年表末年
pub const MAX_YEAR: i32 = 2100;

#[rustfmt::skip]
static LUNAR_INFO: [u32; (MAX_YEAR - MIN_YEAR + 1) as usize] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900-1909
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910-1919
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920-1929
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930-1939
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940-1949
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950-1959
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960-1969
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970-1979
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980-1989
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990-1999
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000-2009
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010-2019
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020-2029
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030-2039
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040-2049
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050-2059
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060-2069
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070-2079
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080-2089
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090-2099
    0x0d520, // 2100
];

/// 一歲的月份資料，由 [`LUNAR_INFO`] 解出。
///
/// # 用例
///
/// ```
/// use nongli::lunar::{YearInfo, Month::*};
///
/// let info = YearInfo::get(2017).unwrap();
/// assert_eq!(Some(6), info.leap_month());
/// assert_eq!(384, info.days());
/// assert_eq!(Ok(30), info.days_in(Leap(6)));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct YearInfo {
    /// 年份
    pub year: i32,
    /// 閏月序號，無閏月則為 `None`
    pub leap_month: Option<u32>,
    /// 閏月是否為大月
    pub leap_is_long: bool,
    /// 正月至十二月是否為大月
    pub month_lengths: [bool; 12],
}

impl YearInfo {
    /// 取得 `year` 年的資料。
    ///
    /// 年表外的年份回報 [`Error::OutOfRangeYear`]。
    pub fn get(year: i32) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::OutOfRangeYear(year));
        }
        let packed = LUNAR_INFO[(year - MIN_YEAR) as usize];
        let leap = packed & 0xf;
        Ok(Self {
            year,
            leap_month: (leap != 0).then_some(leap),
            leap_is_long: packed & 0x10000 != 0,
            month_lengths: std::array::from_fn(|i| packed & (0x8000 >> i) != 0),
        })
    }

    /// 閏月序號，無閏月則返回 `None`。
    pub fn leap_month(&self) -> Option<u32> {
        self.leap_month
    }

    /// 閏月日數，無閏月則為 0。
    pub fn leap_days(&self) -> u32 {
        match self.leap_month {
            Some(_) => 29 + self.leap_is_long as u32,
            None => 0,
        }
    }

    /// 平月 `month` 的日數。
    ///
    /// `month` 不在 `1..=12` 間則回報錯誤。
    pub fn month_days(&self, month: u32) -> Result<u32> {
        if !(1..=12).contains(&month) {
            return Err(Error::month(month));
        }
        Ok(self.common_days(month))
    }

    /// 給定月份（平閏皆可）的日數。
    ///
    /// 若該年並無所求閏月，回報 [`Error::InconsistentLeapRequest`]。
    pub fn days_in(&self, month: Month) -> Result<u32> {
        match month {
            Month::Common(m) => self.month_days(m),
            Month::Leap(m) if !(1..=12).contains(&m) => Err(Error::month(m)),
            Month::Leap(m) if self.leap_month == Some(m) => Ok(self.leap_days()),
            Month::Leap(m) => Err(Error::InconsistentLeapRequest {
                year: self.year,
                month: m,
                leap_month: self.leap_month,
            }),
        }
    }

    /// 全年日數，含閏月。
    pub fn days(&self) -> u32 {
        (1..=12).map(|m| self.common_days(m)).sum::<u32>() + self.leap_days()
    }

    /// 依先後列出全年各月及其日數，閏月緊隨同序號的平月之後。
    ///
    /// # 用例
    ///
    /// ```
    /// use nongli::lunar::{YearInfo, Month::*};
    ///
    /// let info = YearInfo::get(2020).unwrap();
    /// let months: Vec<_> = info.months().map(|(m, _)| m).skip(3).take(3).collect();
    /// assert_eq!(vec![Common(4), Leap(4), Common(5)], months);
    /// ```
    pub fn months(&self) -> impl Iterator<Item = (Month, u32)> + use<> {
        let info = *self;
        (1..=12).flat_map(move |m| {
            let leap = (info.leap_month == Some(m)).then(|| (Month::Leap(m), info.leap_days()));
            std::iter::once((Month::Common(m), info.common_days(m))).chain(leap)
        })
    }

    fn common_days(&self, month: u32) -> u32 {
        29 + self.month_lengths[(month - 1) as usize] as u32
    }
}
