//! Significant-day classification.
//!
//! [`SignificantDay`] is the single primary classification of a day (a
//! festival, fast or other special date). [`DayPredicate`] holds the
//! independent yes/no facts about a day ("is Rosh Chodesh", "has candle
//! lighting"). [`Category`] is either of the two and is what callers filter
//! on.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use super::hebrew::{HebrewDate, HebrewMonth};
use crate::error::ZmanimError;

/// Primary significant-day classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SignificantDay {
    ErevPesach,
    Pesach,
    CholHamoedPesach,
    PesachSheni,
    ErevShavuos,
    Shavuos,
    SeventeenOfTammuz,
    TishaBeav,
    TuBeav,
    ErevRoshHashana,
    RoshHashana,
    TzomGedalyah,
    ErevYomKippur,
    YomKippur,
    ErevSuccos,
    Succos,
    CholHamoedSuccos,
    HoshanaRabbah,
    SheminiAtzeres,
    SimchasTorah,
    Chanukah,
    TenthOfTeves,
    TuBeshvat,
    TaanisEsther,
    Purim,
    ShushanPurim,
    PurimKatan,
    ShushanPurimKatan,
    LagBaomer,
    YomHashoah,
    YomHazikaron,
    YomHaatzmaut,
    YomYerushalayim,
}

impl SignificantDay {
    pub const ALL: [SignificantDay; 33] = [
        SignificantDay::ErevPesach,
        SignificantDay::Pesach,
        SignificantDay::CholHamoedPesach,
        SignificantDay::PesachSheni,
        SignificantDay::ErevShavuos,
        SignificantDay::Shavuos,
        SignificantDay::SeventeenOfTammuz,
        SignificantDay::TishaBeav,
        SignificantDay::TuBeav,
        SignificantDay::ErevRoshHashana,
        SignificantDay::RoshHashana,
        SignificantDay::TzomGedalyah,
        SignificantDay::ErevYomKippur,
        SignificantDay::YomKippur,
        SignificantDay::ErevSuccos,
        SignificantDay::Succos,
        SignificantDay::CholHamoedSuccos,
        SignificantDay::HoshanaRabbah,
        SignificantDay::SheminiAtzeres,
        SignificantDay::SimchasTorah,
        SignificantDay::Chanukah,
        SignificantDay::TenthOfTeves,
        SignificantDay::TuBeshvat,
        SignificantDay::TaanisEsther,
        SignificantDay::Purim,
        SignificantDay::ShushanPurim,
        SignificantDay::PurimKatan,
        SignificantDay::ShushanPurimKatan,
        SignificantDay::LagBaomer,
        SignificantDay::YomHashoah,
        SignificantDay::YomHazikaron,
        SignificantDay::YomHaatzmaut,
        SignificantDay::YomYerushalayim,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            SignificantDay::ErevPesach => "erev_pesach",
            SignificantDay::Pesach => "pesach",
            SignificantDay::CholHamoedPesach => "chol_hamoed_pesach",
            SignificantDay::PesachSheni => "pesach_sheni",
            SignificantDay::ErevShavuos => "erev_shavuos",
            SignificantDay::Shavuos => "shavuos",
            SignificantDay::SeventeenOfTammuz => "seventeen_of_tammuz",
            SignificantDay::TishaBeav => "tisha_beav",
            SignificantDay::TuBeav => "tu_beav",
            SignificantDay::ErevRoshHashana => "erev_rosh_hashana",
            SignificantDay::RoshHashana => "rosh_hashana",
            SignificantDay::TzomGedalyah => "tzom_gedalyah",
            SignificantDay::ErevYomKippur => "erev_yom_kippur",
            SignificantDay::YomKippur => "yom_kippur",
            SignificantDay::ErevSuccos => "erev_succos",
            SignificantDay::Succos => "succos",
            SignificantDay::CholHamoedSuccos => "chol_hamoed_succos",
            SignificantDay::HoshanaRabbah => "hoshana_rabbah",
            SignificantDay::SheminiAtzeres => "shemini_atzeres",
            SignificantDay::SimchasTorah => "simchas_torah",
            SignificantDay::Chanukah => "chanukah",
            SignificantDay::TenthOfTeves => "tenth_of_teves",
            SignificantDay::TuBeshvat => "tu_beshvat",
            SignificantDay::TaanisEsther => "taanis_esther",
            SignificantDay::Purim => "purim",
            SignificantDay::ShushanPurim => "shushan_purim",
            SignificantDay::PurimKatan => "purim_katan",
            SignificantDay::ShushanPurimKatan => "shushan_purim_katan",
            SignificantDay::LagBaomer => "lag_baomer",
            SignificantDay::YomHashoah => "yom_hashoah",
            SignificantDay::YomHazikaron => "yom_hazikaron",
            SignificantDay::YomHaatzmaut => "yom_haatzmaut",
            SignificantDay::YomYerushalayim => "yom_yerushalayim",
        }
    }

    /// Festivals on which work is prohibited.
    pub fn is_assur_bemelacha(&self) -> bool {
        matches!(
            self,
            SignificantDay::Pesach
                | SignificantDay::Shavuos
                | SignificantDay::RoshHashana
                | SignificantDay::YomKippur
                | SignificantDay::Succos
                | SignificantDay::SheminiAtzeres
                | SignificantDay::SimchasTorah
        )
    }

    pub fn is_fast(&self) -> bool {
        matches!(
            self,
            SignificantDay::SeventeenOfTammuz
                | SignificantDay::TishaBeav
                | SignificantDay::TzomGedalyah
                | SignificantDay::YomKippur
                | SignificantDay::TenthOfTeves
                | SignificantDay::TaanisEsther
        )
    }
}

impl fmt::Display for SignificantDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Independent boolean facts about a day.
///
/// Most are "is" checks; the candle-lighting family are "has" checks, see
/// [`CalendarDay::has_candle_lighting`](super::CalendarDay::has_candle_lighting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayPredicate {
    AssurBemelacha,
    TomorrowAssurBemelacha,
    CandleLighting,
    DelayedCandleLighting,
    YomTov,
    YomTovAssurBemelacha,
    ErevYomTov,
    YomTovSheni,
    ErevYomTovSheni,
    CholHamoed,
    Taanis,
    RoshChodesh,
    ErevRoshChodesh,
    Chanukah,
}

impl DayPredicate {
    pub const ALL: [DayPredicate; 14] = [
        DayPredicate::AssurBemelacha,
        DayPredicate::TomorrowAssurBemelacha,
        DayPredicate::CandleLighting,
        DayPredicate::DelayedCandleLighting,
        DayPredicate::YomTov,
        DayPredicate::YomTovAssurBemelacha,
        DayPredicate::ErevYomTov,
        DayPredicate::YomTovSheni,
        DayPredicate::ErevYomTovSheni,
        DayPredicate::CholHamoed,
        DayPredicate::Taanis,
        DayPredicate::RoshChodesh,
        DayPredicate::ErevRoshChodesh,
        DayPredicate::Chanukah,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            DayPredicate::AssurBemelacha => "assur_bemelacha",
            DayPredicate::TomorrowAssurBemelacha => "tomorrow_assur_bemelacha",
            DayPredicate::CandleLighting => "candle_lighting",
            DayPredicate::DelayedCandleLighting => "delayed_candle_lighting",
            DayPredicate::YomTov => "yom_tov",
            DayPredicate::YomTovAssurBemelacha => "yom_tov_assur_bemelacha",
            DayPredicate::ErevYomTov => "erev_yom_tov",
            DayPredicate::YomTovSheni => "yom_tov_sheni",
            DayPredicate::ErevYomTovSheni => "erev_yom_tov_sheni",
            DayPredicate::CholHamoed => "chol_hamoed",
            DayPredicate::Taanis => "taanis",
            DayPredicate::RoshChodesh => "rosh_chodesh",
            DayPredicate::ErevRoshChodesh => "erev_rosh_chodesh",
            DayPredicate::Chanukah => "chanukah",
        }
    }

    /// Bit used for this predicate in a [`PredicateSet`].
    const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for DayPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Snapshot of every [`DayPredicate`] for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PredicateSet(u16);

impl PredicateSet {
    pub fn insert(&mut self, predicate: DayPredicate) {
        self.0 |= predicate.bit();
    }

    pub fn contains(&self, predicate: DayPredicate) -> bool {
        self.0 & predicate.bit() != 0
    }

    pub fn iter(&self) -> impl Iterator<Item = DayPredicate> + '_ {
        DayPredicate::ALL
            .into_iter()
            .filter(move |predicate| self.contains(*predicate))
    }
}

/// Something a day can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Significant(SignificantDay),
    Predicate(DayPredicate),
}

impl Category {
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Significant(day) => day.tag(),
            Category::Predicate(predicate) => predicate.tag(),
        }
    }

    /// Every category reachable by tag, predicate tags first.
    ///
    /// Predicates whose tag is shadowed by a significant day are left out.
    pub fn all() -> Vec<Category> {
        DayPredicate::ALL
            .into_iter()
            .filter(|predicate| {
                !SignificantDay::ALL
                    .iter()
                    .any(|day| day.tag() == predicate.tag())
            })
            .map(Category::Predicate)
            .chain(SignificantDay::ALL.into_iter().map(Category::Significant))
            .collect()
    }

    /// Resolve a list of tags, failing on the first unknown one.
    pub fn parse_all<S: AsRef<str>>(tags: &[S]) -> Result<Vec<Category>, ZmanimError> {
        tags.iter().map(|tag| tag.as_ref().parse()).collect()
    }
}

impl FromStr for Category {
    type Err = ZmanimError;

    /// Significant-day tags win over predicate tags of the same name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if let Some(day) = SignificantDay::ALL.iter().find(|day| day.tag() == tag) {
            return Ok(Category::Significant(*day));
        }
        DayPredicate::ALL
            .iter()
            .find(|predicate| predicate.tag() == tag)
            .map(|predicate| Category::Predicate(*predicate))
            .ok_or_else(|| ZmanimError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<SignificantDay> for Category {
    fn from(day: SignificantDay) -> Self {
        Category::Significant(day)
    }
}

impl From<DayPredicate> for Category {
    fn from(predicate: DayPredicate) -> Self {
        Category::Predicate(predicate)
    }
}

// # Rules

/// Primary classification of a Hebrew date.
pub(crate) fn classify(
    date: &HebrewDate,
    weekday: Weekday,
    in_israel: bool,
    use_modern_holidays: bool,
) -> Option<SignificantDay> {
    use HebrewMonth::*;
    use SignificantDay as S;
    use Weekday::*;

    let day = date.day;
    match date.month {
        Nissan => {
            if day == 14 {
                return Some(S::ErevPesach);
            }
            if day == 15 || day == 21 || (!in_israel && (day == 16 || day == 22)) {
                return Some(S::Pesach);
            }
            if (17..=20).contains(&day) || (day == 16 && in_israel) {
                return Some(S::CholHamoedPesach);
            }
            if use_modern_holidays
                && ((day == 26 && weekday == Thu)
                    || (day == 28 && weekday == Mon)
                    || (day == 27 && weekday != Sun && weekday != Fri))
            {
                return Some(S::YomHashoah);
            }
            None
        }
        Iyar => {
            if use_modern_holidays {
                if (day == 4 && weekday == Tue)
                    || ((day == 3 || day == 2) && weekday == Wed)
                    || (day == 5 && weekday == Mon)
                {
                    return Some(S::YomHazikaron);
                }
                if (day == 5 && weekday == Wed)
                    || ((day == 4 || day == 3) && weekday == Thu)
                    || (day == 6 && weekday == Tue)
                {
                    return Some(S::YomHaatzmaut);
                }
                if day == 28 {
                    return Some(S::YomYerushalayim);
                }
            }
            match day {
                14 => Some(S::PesachSheni),
                18 => Some(S::LagBaomer),
                _ => None,
            }
        }
        Sivan => match day {
            5 => Some(S::ErevShavuos),
            6 => Some(S::Shavuos),
            7 if !in_israel => Some(S::Shavuos),
            _ => None,
        },
        // Fasts that fall on Shabbos are pushed to Sunday.
        Tammuz if (day == 17 && weekday != Sat) || (day == 18 && weekday == Sun) => {
            Some(S::SeventeenOfTammuz)
        }
        Av if (day == 9 && weekday != Sat) || (day == 10 && weekday == Sun) => Some(S::TishaBeav),
        Av if day == 15 => Some(S::TuBeav),
        Elul if day == 29 => Some(S::ErevRoshHashana),
        Tishrei => match day {
            1 | 2 => Some(S::RoshHashana),
            3 if weekday != Sat => Some(S::TzomGedalyah),
            4 if weekday == Sun => Some(S::TzomGedalyah),
            9 => Some(S::ErevYomKippur),
            10 => Some(S::YomKippur),
            14 => Some(S::ErevSuccos),
            15 => Some(S::Succos),
            16 if !in_israel => Some(S::Succos),
            16..=20 => Some(S::CholHamoedSuccos),
            21 => Some(S::HoshanaRabbah),
            22 => Some(S::SheminiAtzeres),
            23 if !in_israel => Some(S::SimchasTorah),
            _ => None,
        },
        Kislev if day >= 25 => Some(S::Chanukah),
        Teves => match day {
            1 | 2 => Some(S::Chanukah),
            3 if date.is_kislev_short() => Some(S::Chanukah),
            10 => Some(S::TenthOfTeves),
            _ => None,
        },
        Shevat if day == 15 => Some(S::TuBeshvat),
        AdarI => match day {
            14 => Some(S::PurimKatan),
            15 => Some(S::ShushanPurimKatan),
            _ => None,
        },
        month if month.is_purim_month() => {
            // Taanis Esther moves to Thursday when the 13th is Shabbos.
            if ((day == 11 || day == 12) && weekday == Thu)
                || (day == 13 && weekday != Fri && weekday != Sat)
            {
                return Some(S::TaanisEsther);
            }
            match day {
                14 => Some(S::Purim),
                15 => Some(S::ShushanPurim),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Evaluate every predicate for a day.
pub(crate) fn evaluate_predicates(
    date: &HebrewDate,
    weekday: Weekday,
    in_israel: bool,
    significant: Option<SignificantDay>,
) -> PredicateSet {
    use DayPredicate as P;
    use HebrewMonth::*;

    let day = date.day;
    let mut set = PredicateSet::default();

    let yom_tov_assur_bemelacha = significant.is_some_and(|s| s.is_assur_bemelacha());
    let assur_bemelacha = weekday == Weekday::Sat || yom_tov_assur_bemelacha;

    let erev_yom_tov = matches!(
        significant,
        Some(
            SignificantDay::ErevPesach
                | SignificantDay::ErevShavuos
                | SignificantDay::ErevRoshHashana
                | SignificantDay::ErevYomKippur
                | SignificantDay::ErevSuccos
                | SignificantDay::HoshanaRabbah
        )
    ) || (significant == Some(SignificantDay::CholHamoedPesach) && day == 20);

    let erev_yom_tov_sheni = (date.month == Tishrei && day == 1)
        || (!in_israel
            && ((date.month == Nissan && (day == 15 || day == 21))
                || (date.month == Tishrei && (day == 15 || day == 22))
                || (date.month == Sivan && day == 6)));

    let yom_tov_sheni = (date.month == Tishrei && day == 2)
        || (!in_israel
            && ((date.month == Nissan && (day == 16 || day == 22))
                || (date.month == Tishrei && (day == 16 || day == 23))
                || (date.month == Sivan && day == 7)));

    let tomorrow_assur_bemelacha = weekday == Weekday::Fri || erev_yom_tov || erev_yom_tov_sheni;

    let taanis = significant.is_some_and(|s| s.is_fast());

    // Erev days and fasts (other than Yom Kippur) are not themselves Yom Tov.
    let yom_tov = significant.is_some_and(|s| {
        !matches!(
            s,
            SignificantDay::ErevPesach
                | SignificantDay::ErevShavuos
                | SignificantDay::ErevRoshHashana
                | SignificantDay::ErevYomKippur
                | SignificantDay::ErevSuccos
        ) && (!s.is_fast() || s == SignificantDay::YomKippur)
    });

    let chol_hamoed = matches!(
        significant,
        Some(
            SignificantDay::CholHamoedPesach
                | SignificantDay::CholHamoedSuccos
                | SignificantDay::HoshanaRabbah
        )
    );

    let rosh_chodesh = (day == 1 && date.month != Tishrei) || day == 30;
    let erev_rosh_chodesh = day == 29 && date.month != Elul;

    if assur_bemelacha {
        set.insert(P::AssurBemelacha);
    }
    if tomorrow_assur_bemelacha {
        set.insert(P::TomorrowAssurBemelacha);
        set.insert(P::CandleLighting);
        // Lighting waits for nightfall when today is itself a prohibited day.
        if weekday != Weekday::Fri && assur_bemelacha {
            set.insert(P::DelayedCandleLighting);
        }
    }
    if yom_tov {
        set.insert(P::YomTov);
    }
    if yom_tov_assur_bemelacha {
        set.insert(P::YomTovAssurBemelacha);
    }
    if erev_yom_tov {
        set.insert(P::ErevYomTov);
    }
    if yom_tov_sheni {
        set.insert(P::YomTovSheni);
    }
    if erev_yom_tov_sheni {
        set.insert(P::ErevYomTovSheni);
    }
    if chol_hamoed {
        set.insert(P::CholHamoed);
    }
    if taanis {
        set.insert(P::Taanis);
    }
    if rosh_chodesh {
        set.insert(P::RoshChodesh);
    }
    if erev_rosh_chodesh {
        set.insert(P::ErevRoshChodesh);
    }
    if significant == Some(SignificantDay::Chanukah) {
        set.insert(P::Chanukah);
    }
    set
}
