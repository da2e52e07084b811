//! Time labels placed next to scatter points

/// Direction a label is pushed away from its marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelOffset {
    UpRight,
    DownRight,
    UpLeft,
    DownLeft,
}

impl LabelOffset {
    /// Order in which consecutive labels cycle through the offsets
    pub const ROTATION: [LabelOffset; 4] = [
        LabelOffset::UpRight,
        LabelOffset::DownRight,
        LabelOffset::UpLeft,
        LabelOffset::DownLeft,
    ];

    pub fn nth(n: usize) -> Self {
        Self::ROTATION[n % Self::ROTATION.len()]
    }

    /// Unit direction in screen-independent terms: `+x` right, `+y` up
    pub fn direction(self) -> [f32; 2] {
        match self {
            LabelOffset::UpRight => [1.0, 1.0],
            LabelOffset::DownRight => [1.0, -1.0],
            LabelOffset::UpLeft => [-1.0, 1.0],
            LabelOffset::DownLeft => [-1.0, -1.0],
        }
    }
}

/// A text label anchored to a data point
#[derive(Debug, Clone, PartialEq)]
pub struct TimeLabel {
    pub position: [f64; 2],
    pub text: String,
    pub offset: LabelOffset,
}

/// Label every `stride`-th point, rotating offsets to reduce overlap.
///
/// `phase` shifts the start of the rotation so two series labelling the same
/// rows push their labels in different directions.
pub fn time_labels(times: &[String], points: &[[f64; 2]], stride: usize, phase: usize) -> Vec<TimeLabel> {
    let stride = stride.max(1);
    times
        .iter()
        .zip(points)
        .step_by(stride)
        .enumerate()
        .map(|(n, (text, position))| TimeLabel {
            position: *position,
            text: text.clone(),
            offset: LabelOffset::nth(n + phase),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> (Vec<String>, Vec<[f64; 2]>) {
        let times = (0..n).map(|i| format!("t{i}")).collect();
        let points = (0..n).map(|i| [i as f64, i as f64 * 2.0]).collect();
        (times, points)
    }

    #[test]
    fn test_every_row_labelled_with_rotation() {
        let (times, points) = rows(5);
        let labels = time_labels(&times, &points, 1, 0);
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0].offset, LabelOffset::UpRight);
        assert_eq!(labels[1].offset, LabelOffset::DownRight);
        assert_eq!(labels[2].offset, LabelOffset::UpLeft);
        assert_eq!(labels[3].offset, LabelOffset::DownLeft);
        assert_eq!(labels[4].offset, LabelOffset::UpRight);
        assert_eq!(labels[3].position, [3.0, 6.0]);
    }

    #[test]
    fn test_stride_and_phase() {
        let (times, points) = rows(7);
        let labels = time_labels(&times, &points, 3, 1);
        let texts: Vec<&str> = labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["t0", "t3", "t6"]);
        assert_eq!(labels[0].offset, LabelOffset::DownRight);
        assert_eq!(labels[2].offset, LabelOffset::DownLeft);
    }

    #[test]
    fn test_zero_stride_treated_as_one() {
        let (times, points) = rows(3);
        assert_eq!(time_labels(&times, &points, 0, 0).len(), 3);
    }
}
