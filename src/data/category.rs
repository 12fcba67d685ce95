use plotters::style::RGBColor;

/// Qualitative thickness change of a lamina between wall and fold.
///
/// Declaration order is the stacking order: strongly decreased first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThicknessCategory {
    StronglyDecreased,
    Decreased,
    Unchanged,
    Increased,
    StronglyIncreased,
}

impl ThicknessCategory {
    pub const ALL: [ThicknessCategory; 5] = [
        ThicknessCategory::StronglyDecreased,
        ThicknessCategory::Decreased,
        ThicknessCategory::Unchanged,
        ThicknessCategory::Increased,
        ThicknessCategory::StronglyIncreased,
    ];

    pub fn index(self) -> usize {
        match self {
            ThicknessCategory::StronglyDecreased => 0,
            ThicknessCategory::Decreased => 1,
            ThicknessCategory::Unchanged => 2,
            ThicknessCategory::Increased => 3,
            ThicknessCategory::StronglyIncreased => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThicknessCategory::StronglyDecreased => "--",
            ThicknessCategory::Decreased => "-",
            ThicknessCategory::Unchanged => "0",
            ThicknessCategory::Increased => "+",
            ThicknessCategory::StronglyIncreased => "++",
        }
    }

    /// Fill colour, identical in every chart.
    pub fn color(self) -> RGBColor {
        match self {
            ThicknessCategory::StronglyDecreased => RGBColor(0x00, 0x00, 0xFF),
            ThicknessCategory::Decreased => RGBColor(0x78, 0x79, 0xFF),
            ThicknessCategory::Unchanged => RGBColor(0xFD, 0xFD, 0x96),
            ThicknessCategory::Increased => RGBColor(0xF0, 0x74, 0x70),
            ThicknessCategory::StronglyIncreased => RGBColor(0xDC, 0x1C, 0x13),
        }
    }
}
