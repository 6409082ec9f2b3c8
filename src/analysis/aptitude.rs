use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::AppError;
use crate::response::models::{TeamSlot, TrainedChara};

/// Aptitude letter grade, worst to best. The wire encodes these as
/// ordinals 1..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    G,
    F,
    E,
    D,
    C,
    B,
    A,
    S,
}

impl Grade {
    pub fn from_ordinal(ordinal: u8) -> Result<Self, AppError> {
        match ordinal {
            1 => Ok(Grade::G),
            2 => Ok(Grade::F),
            3 => Ok(Grade::E),
            4 => Ok(Grade::D),
            5 => Ok(Grade::C),
            6 => Ok(Grade::B),
            7 => Ok(Grade::A),
            8 => Ok(Grade::S),
            other => Err(AppError::InvalidGrade(other as i64)),
        }
    }

    #[allow(dead_code)]
    pub fn ordinal(self) -> u8 {
        match self {
            Grade::G => 1,
            Grade::F => 2,
            Grade::E => 3,
            Grade::D => 4,
            Grade::C => 5,
            Grade::B => 6,
            Grade::A => 7,
            Grade::S => 8,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Grade::G => "G",
            Grade::F => "F",
            Grade::E => "E",
            Grade::D => "D",
            Grade::C => "C",
            Grade::B => "B",
            Grade::A => "A",
            Grade::S => "S",
        }
    }

    #[allow(dead_code)]
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "G" => Some(Grade::G),
            "F" => Some(Grade::F),
            "E" => Some(Grade::E),
            "D" => Some(Grade::D),
            "C" => Some(Grade::C),
            "B" => Some(Grade::B),
            "A" => Some(Grade::A),
            "S" => Some(Grade::S),
            _ => None,
        }
    }
}

/// Race distance category carried on each roster slot. Dirt is encoded
/// as a fifth distance category even though it is really a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DistanceCategory {
    Short,
    Mile,
    Middle,
    Long,
    Dirt,
}

impl DistanceCategory {
    pub fn from_code(code: u8) -> Result<Self, AppError> {
        match code {
            1 => Ok(DistanceCategory::Short),
            2 => Ok(DistanceCategory::Mile),
            3 => Ok(DistanceCategory::Middle),
            4 => Ok(DistanceCategory::Long),
            5 => Ok(DistanceCategory::Dirt),
            other => Err(AppError::UnknownDistanceType(other as i64)),
        }
    }

    pub fn surface(self) -> Surface {
        match self {
            DistanceCategory::Dirt => Surface::Dirt,
            _ => Surface::Turf,
        }
    }

    /// Which distance aptitude this category reads. Dirt races in this
    /// game are all mid-distance, so the dirt category reads (and is
    /// reported under) the Mile aptitude. Intentional, not a bug.
    pub fn aptitude_bucket(self) -> DistanceCategory {
        match self {
            DistanceCategory::Dirt => DistanceCategory::Mile,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Turf,
    Dirt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunningStyle {
    FrontRunner,
    PaceChaser,
    LateSurger,
    EndCloser,
}

impl RunningStyle {
    pub fn from_code(code: u8) -> Result<Self, AppError> {
        match code {
            1 => Ok(RunningStyle::FrontRunner),
            2 => Ok(RunningStyle::PaceChaser),
            3 => Ok(RunningStyle::LateSurger),
            4 => Ok(RunningStyle::EndCloser),
            other => Err(AppError::UnknownRunningStyle(other as i64)),
        }
    }
}

/// Grade -> count map for one aptitude dimension. Displays best grade
/// first, e.g. `{A: 2, E: 1}`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Distribution(BTreeMap<Grade, u32>);

impl Distribution {
    fn bump(&mut self, grade: Grade) {
        *self.0.entry(grade).or_insert(0) += 1;
    }

    #[allow(dead_code)]
    pub fn count(&self, grade: Grade) -> u32 {
        self.0.get(&grade).copied().unwrap_or(0)
    }

    #[allow(dead_code)]
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, (grade, count)) in self.0.iter().rev().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", grade.letter(), count)?;
        }
        write!(f, "}}")
    }
}

/// One roster slot joined to its trained character, with all three
/// aptitudes resolved. Kept for the per-character breakdown view.
#[derive(Debug, Clone)]
pub struct ResolvedEntry {
    pub trained_chara_id: u64,
    #[allow(dead_code)]
    pub category: DistanceCategory,
    pub distance_bucket: DistanceCategory,
    pub surface: Surface,
    pub style: RunningStyle,
    pub distance_grade: Grade,
    pub surface_grade: Grade,
    pub style_grade: Grade,
}

#[derive(Debug, Clone)]
pub struct AggregateReport {
    pub opponent_name: String,
    pub distance: Distribution,
    pub surface: Distribution,
    pub style: Distribution,
    pub entries: Vec<ResolvedEntry>,
}

/// Walks the roster, joins each filled slot to the character pool and
/// tallies the resolved letter grades into the three distributions.
///
/// Slots with trained_chara_id == 0 are empty. Slots whose character is
/// missing from the pool are skipped; the server sometimes sends a
/// roster that is ahead of the character array. An aptitude ordinal
/// outside 1..=8 aborts the whole aggregation.
pub fn aggregate(
    opponent_name: &str,
    roster: &[TeamSlot],
    pool: &[TrainedChara],
) -> Result<AggregateReport, AppError> {
    let lookup: HashMap<u64, &TrainedChara> = pool
        .iter()
        .map(|chara| (chara.trained_chara_id, chara))
        .collect();

    // Partition filled slots by distance category up front; the counts
    // are the same either way, but the breakdown reads in race order.
    let mut by_category: BTreeMap<DistanceCategory, Vec<&TeamSlot>> = BTreeMap::new();
    for slot in roster.iter().filter(|s| s.trained_chara_id != 0) {
        let category = DistanceCategory::from_code(slot.distance_type)?;
        by_category.entry(category).or_default().push(slot);
    }

    let mut distance = Distribution::default();
    let mut surface = Distribution::default();
    let mut style = Distribution::default();
    let mut entries = Vec::new();

    for (&category, slots) in &by_category {
        for slot in slots {
            let Some(chara) = lookup.get(&slot.trained_chara_id) else {
                continue;
            };
            let running_style = RunningStyle::from_code(slot.running_style)?;
            let slot_surface = category.surface();
            let bucket = category.aptitude_bucket();

            let surface_grade = Grade::from_ordinal(match slot_surface {
                Surface::Turf => chara.proper_ground_turf,
                Surface::Dirt => chara.proper_ground_dirt,
            })?;

            let distance_grade = Grade::from_ordinal(match bucket {
                DistanceCategory::Short => chara.proper_distance_short,
                DistanceCategory::Mile => chara.proper_distance_mile,
                DistanceCategory::Middle => chara.proper_distance_middle,
                DistanceCategory::Long => chara.proper_distance_long,
                // Unreachable, the bucket never resolves to Dirt.
                DistanceCategory::Dirt => chara.proper_distance_mile,
            })?;

            let style_grade = Grade::from_ordinal(match running_style {
                RunningStyle::FrontRunner => chara.proper_running_style_nige,
                RunningStyle::PaceChaser => chara.proper_running_style_senko,
                RunningStyle::LateSurger => chara.proper_running_style_sashi,
                RunningStyle::EndCloser => chara.proper_running_style_oikomi,
            })?;

            distance.bump(distance_grade);
            surface.bump(surface_grade);
            style.bump(style_grade);

            entries.push(ResolvedEntry {
                trained_chara_id: slot.trained_chara_id,
                category,
                distance_bucket: bucket,
                surface: slot_surface,
                style: running_style,
                distance_grade,
                surface_grade,
                style_grade,
            });
        }
    }

    Ok(AggregateReport {
        opponent_name: opponent_name.to_string(),
        distance,
        surface,
        style,
        entries,
    })
}
