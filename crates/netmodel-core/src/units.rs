//! Measurement units used across the model. Every category has a closed set of symbols; the
//! symbols of time, delay, capacity and distance units map to a scale factor relative to the
//! smallest unit of their category, buffer units do not convert.

use std::str::FromStr;

/// A category of measurement units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    Time,
    Delay,
    Capacity,
    Distance,
    Buffer,
}

impl std::fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UnitCategory::Time => "time",
            UnitCategory::Delay => "delay",
            UnitCategory::Capacity => "capacity",
            UnitCategory::Distance => "distance",
            UnitCategory::Buffer => "buffer",
        };
        f.write_str(s)
    }
}

/// Error for unit symbols outside their category's closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    #[error("unknown {category} unit {symbol:?}")]
    Unknown {
        category: UnitCategory,
        symbol: String,
    },
}

macro_rules! unit {
    ($name: ident, $category: ident, { $($variant: ident => $symbol: literal),+ $(,)? }) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $symbol)]
                $variant,
            )+
        }

        impl $name {
            pub const CATEGORY: UnitCategory = UnitCategory::$category;

            /// Every unit of this category.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The canonical symbol of this unit.
            pub const fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnitError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($symbol => Ok($name::$variant),)+
                    _ => Err(UnitError::Unknown {
                        category: Self::CATEGORY,
                        symbol: s.to_owned(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.symbol())
            }
        }
    };
}

// Scales are relative to the first (smallest) unit of each category
macro_rules! scaled {
    ($name: ident, { $($variant: ident => $scale: expr),+ $(,)? }) => {
        impl Unit for $name {
            fn scale(self) -> f64 {
                match self {
                    $($name::$variant => $scale,)+
                }
            }
        }
    };
}

unit!(TimeUnit, Time, {
    Micros => "us",
    Millis => "ms",
    Secs => "sec",
    Mins => "min",
});

scaled!(TimeUnit, {
    Micros => 1.0,
    Millis => 1e3,
    Secs => 1e6,
    Mins => 6e7,
});

unit!(DelayUnit, Delay, {
    Nanos => "ns",
    Micros => "us",
    Millis => "ms",
    Secs => "sec",
});

scaled!(DelayUnit, {
    Nanos => 1.0,
    Micros => 1e3,
    Millis => 1e6,
    Secs => 1e9,
});

unit!(CapacityUnit, Capacity, {
    Bps => "bps",
    Kbps => "kbps",
    Mbps => "Mbps",
    Gbps => "Gbps",
});

scaled!(CapacityUnit, {
    Bps => 1.0,
    Kbps => 1e3,
    Mbps => 1e6,
    Gbps => 1e9,
});

unit!(DistanceUnit, Distance, {
    Meters => "m",
    Kilometers => "km",
});

scaled!(DistanceUnit, {
    Meters => 1.0,
    Kilometers => 1e3,
});

unit!(BufferUnit, Buffer, {
    Bytes => "bytes",
    Packets => "packets",
});

/// A unit with a scale factor relative to the smallest unit of its category.
pub trait Unit: Copy + FromStr<Err = UnitError> {
    fn scale(self) -> f64;

    /// Expresses `value`, given in `self`, in the `target` unit.
    fn convert(self, value: f64, target: Self) -> f64 {
        value * self.scale() / target.scale()
    }
}

/// Converts `value` from unit symbol `from` to unit symbol `to` of the same category.
pub fn convert<U: Unit>(value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
    let from = from.parse::<U>()?;
    let to = to.parse::<U>()?;
    Ok(from.convert(value, to))
}

pub fn convert_time(value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
    convert::<TimeUnit>(value, from, to)
}

pub fn convert_delay(value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
    convert::<DelayUnit>(value, from, to)
}

pub fn convert_capacity(value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
    convert::<CapacityUnit>(value, from, to)
}

pub fn convert_distance(value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
    convert::<DistanceUnit>(value, from, to)
}

pub fn is_valid_time_unit(symbol: &str) -> bool {
    symbol.parse::<TimeUnit>().is_ok()
}

pub fn is_valid_delay_unit(symbol: &str) -> bool {
    symbol.parse::<DelayUnit>().is_ok()
}

pub fn is_valid_capacity_unit(symbol: &str) -> bool {
    symbol.parse::<CapacityUnit>().is_ok()
}

pub fn is_valid_distance_unit(symbol: &str) -> bool {
    symbol.parse::<DistanceUnit>().is_ok()
}

pub fn is_valid_buffer_unit(symbol: &str) -> bool {
    symbol.parse::<BufferUnit>().is_ok()
}
