//! 格式化日期相關功能

use super::{LunarDate, Month};

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 干支序號轉為文本形式。
///
/// # 用例
///
/// ```
/// use nongli::lunar;
///
/// assert_eq!("乙巳", lunar::fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    static NAME1: &[&str] = &["癸", "甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬"];
    static NAME2: &[&str] = &[
        "亥", "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌",
    ];
    NAME1[num.rem_euclid(10) as usize].to_owned() + NAME2[num.rem_euclid(12) as usize]
}

/// 取得年份生肖。
///
/// # 用例
///
/// ```
/// use nongli::lunar;
///
/// assert_eq!("龍", lunar::fmt::zodiac(2024));
/// ```
pub fn zodiac(year: i32) -> &'static str {
    const NAMES: &[&str] = &[
        "鼠", "牛", "虎", "兔", "龍", "蛇", "馬", "羊", "猴", "雞", "狗", "豬",
    ];
    NAMES[(year - 4).rem_euclid(12) as usize]
}

/// 取得月名（含「月」字）。十一、十二月稱「冬月」「臘月」。
///
/// # 用例
///
/// ```
/// use nongli::lunar::{self, Month::*};
///
/// assert_eq!("冬月", lunar::fmt::month(Common(11)));
/// assert_eq!("閏正月", lunar::fmt::month(Leap(1)));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month(m: Month) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "閏";
    }
    let num = m.num();
    rt += match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => "臘",
        _ => panic!("month {} not in 1..=12", num),
    };
    rt += "月";
    rt
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use nongli::lunar;
///
/// assert_eq!("初十", lunar::fmt::day(10));
/// assert_eq!("廿五", lunar::fmt::day(25));
/// assert_eq!("三十", lunar::fmt::day(30));
/// ```
///
/// # Panics
///
/// 若日序號不在 `1..=30` 間則 panic。
pub fn day(d: u32) -> String {
    match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => panic!("day {} not in 1..=30", d),
    }
    .to_owned()
        + NUM_CHINESE[(d % 10) as usize]
}

/// 農曆日期的完整寫法，如「丁酉年閏六月初一」。
///
/// 換算所得的日期總能格式化；手工構造的日期若月、日越界則 panic，見 [`month`]、[`day`]。
///
/// # 用例
///
/// ```
/// use nongli::lunar::{self, solar_to_lunar};
///
/// let date = solar_to_lunar(2000, 1, 1).unwrap();
/// assert_eq!("己卯年冬月廿五", lunar::fmt::lunar_date(&date));
/// ```
pub fn lunar_date(date: &LunarDate) -> String {
    sexagenary(date.sexagenary_year()) + "年" + &month(date.month) + &day(date.day)
}
