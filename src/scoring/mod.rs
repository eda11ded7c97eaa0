//! Core scoring pipeline: raw input -> [`RawScore`] -> [`ScaledScore`] ->
//! [`RankedScore`]. Everything here is a pure value transformation; nothing
//! mutates its input or touches I/O.

pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four fixed culture quadrants. Closed set, no extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Culture {
    Collaborate,
    Create,
    Compete,
    Control,
}

impl Culture {
    pub const fn ordered() -> [Self; 4] {
        [Self::Collaborate, Self::Create, Self::Compete, Self::Control]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Collaborate => "Collaborate",
            Self::Create => "Create",
            Self::Compete => "Compete",
            Self::Control => "Control",
        }
    }

    /// Precedence applied when two quadrants scale to the same value:
    /// Control > Compete > Create > Collaborate.
    const fn tie_break(self) -> u8 {
        match self {
            Self::Control => 0,
            Self::Compete => 1,
            Self::Create => 2,
            Self::Collaborate => 3,
        }
    }
}

/// A single (culture, value) pair. Raw scores carry `u32`, scaled scores `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CultureScore<T> {
    pub culture: Culture,
    pub value: T,
}

impl CultureScore<u32> {
    fn scale(self, max: u32) -> CultureScore<f64> {
        // raw * 100 / max: when raw == max the numerator is exactly 100 * max,
        // so the quotient is exactly 100.0.
        CultureScore {
            culture: self.culture,
            value: f64::from(self.value) * 100.0 / f64::from(max),
        }
    }
}

/// Caller-supplied raw values, one per quadrant. Missing fields default to 0.
/// Inbound only; responses serialize the tagged [`RawScore`] instead.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ScoreInput {
    pub collaborate: u32,
    pub create: u32,
    pub compete: u32,
    pub control: u32,
}

/// The four raw quadrant scores, each tagged with its own culture. Immutable
/// once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawScore {
    pub collaborate: CultureScore<u32>,
    pub create: CultureScore<u32>,
    pub compete: CultureScore<u32>,
    pub control: CultureScore<u32>,
}

impl RawScore {
    pub fn new(input: &ScoreInput) -> Self {
        Self {
            collaborate: CultureScore {
                culture: Culture::Collaborate,
                value: input.collaborate,
            },
            create: CultureScore {
                culture: Culture::Create,
                value: input.create,
            },
            compete: CultureScore {
                culture: Culture::Compete,
                value: input.compete,
            },
            control: CultureScore {
                culture: Culture::Control,
                value: input.control,
            },
        }
    }

    pub const fn entries(&self) -> [CultureScore<u32>; 4] {
        [self.collaborate, self.create, self.compete, self.control]
    }

    /// Maximum raw value across the four quadrants, the basis for scaling.
    pub fn max_value(&self) -> u32 {
        self.collaborate
            .value
            .max(self.create.value)
            .max(self.compete.value)
            .max(self.control.value)
    }

    /// Normalize the four values onto a common 0-100 scale. Errors when every
    /// quadrant is zero, since there is no maximum to scale against.
    pub fn scale(&self) -> Result<ScaledScore, ScoreError> {
        let max = self.max_value();
        if max == 0 {
            return Err(ScoreError::AllValuesZero);
        }

        Ok(ScaledScore {
            collaborate: self.collaborate.scale(max),
            create: self.create.scale(max),
            compete: self.compete.scale(max),
            control: self.control.scale(max),
        })
    }
}

impl fmt::Display for RawScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Collaborate: {}, Create: {}, Compete: {}, Control: {}",
            self.collaborate.value, self.create.value, self.compete.value, self.control.value
        )
    }
}

/// The four quadrant scores after normalization; values lie in [0, 100] and
/// the quadrant holding the raw maximum is exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaledScore {
    pub collaborate: CultureScore<f64>,
    pub create: CultureScore<f64>,
    pub compete: CultureScore<f64>,
    pub control: CultureScore<f64>,
}

impl ScaledScore {
    pub const fn entries(&self) -> [CultureScore<f64>; 4] {
        [self.collaborate, self.create, self.compete, self.control]
    }

    /// Total order over the quadrants, descending by scaled value. Equal
    /// values fall back to the fixed precedence documented on
    /// [`Culture::tie_break`].
    pub fn rank(&self) -> RankedScore {
        let mut entries = self.entries();
        entries.sort_by(|a, b| {
            b.value
                .total_cmp(&a.value)
                .then_with(|| a.culture.tie_break().cmp(&b.culture.tie_break()))
        });

        let [first, second, third, fourth] = entries;
        RankedScore {
            first,
            second,
            third,
            fourth,
        }
    }
}

impl fmt::Display for ScaledScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Collaborate: {:.2}, Create: {:.2}, Compete: {:.2}, Control: {:.2}",
            self.collaborate.value, self.create.value, self.compete.value, self.control.value
        )
    }
}

/// Positions First through Fourth, each holding a distinct culture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedScore {
    pub first: CultureScore<f64>,
    pub second: CultureScore<f64>,
    pub third: CultureScore<f64>,
    pub fourth: CultureScore<f64>,
}

impl RankedScore {
    pub const fn positions(&self) -> [(&'static str, CultureScore<f64>); 4] {
        [
            ("First", self.first),
            ("Second", self.second),
            ("Third", self.third),
            ("Fourth", self.fourth),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// Every quadrant is zero, so there is no maximum to scale against.
    AllValuesZero,
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::AllValuesZero => {
                write!(f, "at least one culture value must be greater than zero")
            }
        }
    }
}

impl std::error::Error for ScoreError {}
