use crate::analysis::aptitude::{DistanceCategory, RunningStyle, Surface};

/// Category label lookup. The renderer only depends on this seam, so
/// swapping in another game locale is a matter of one more table.
pub trait LabelTable {
    fn distance_label(&self, category: DistanceCategory) -> &'static str;
    fn surface_label(&self, surface: Surface) -> &'static str;
    fn style_label(&self, style: RunningStyle) -> &'static str;
}

pub struct EnglishLabels;

impl LabelTable for EnglishLabels {
    fn distance_label(&self, category: DistanceCategory) -> &'static str {
        match category {
            DistanceCategory::Short => "Short",
            DistanceCategory::Mile => "Mile",
            DistanceCategory::Middle => "Medium",
            DistanceCategory::Long => "Long",
            DistanceCategory::Dirt => "Dirt",
        }
    }

    fn surface_label(&self, surface: Surface) -> &'static str {
        match surface {
            Surface::Turf => "Turf",
            Surface::Dirt => "Dirt",
        }
    }

    fn style_label(&self, style: RunningStyle) -> &'static str {
        match style {
            RunningStyle::FrontRunner => "Front Runner",
            RunningStyle::PaceChaser => "Pace Chaser",
            RunningStyle::LateSurger => "Late Surger",
            RunningStyle::EndCloser => "End Closer",
        }
    }
}

pub struct JapaneseLabels;

impl LabelTable for JapaneseLabels {
    fn distance_label(&self, category: DistanceCategory) -> &'static str {
        match category {
            DistanceCategory::Short => "短距離",
            DistanceCategory::Mile => "マイル",
            DistanceCategory::Middle => "中距離",
            DistanceCategory::Long => "長距離",
            DistanceCategory::Dirt => "ダート",
        }
    }

    fn surface_label(&self, surface: Surface) -> &'static str {
        match surface {
            Surface::Turf => "芝",
            Surface::Dirt => "ダート",
        }
    }

    fn style_label(&self, style: RunningStyle) -> &'static str {
        match style {
            RunningStyle::FrontRunner => "逃げ",
            RunningStyle::PaceChaser => "先行",
            RunningStyle::LateSurger => "差し",
            RunningStyle::EndCloser => "追込",
        }
    }
}
