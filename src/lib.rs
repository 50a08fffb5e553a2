// This file is part of Exact Unit.
//
// Exact Unit is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Exact Unit is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Exact Unit.  If not, see <http://www.gnu.org/licenses/>.

//! Compile-time dimensional analysis over exact rational arithmetic.
//!
//! A [`Quantity`] pairs a numeric value with a zero-sized unit tag; the unit
//! carries an exact [`Ratio`] to its dimension's coherent unit, and the
//! dimension carries rational exponents over eight base axes. All unit and
//! dimension bookkeeping happens in const evaluation, so mismatched
//! dimensions, truncating implicit conversions, and inexact unit roots are
//! build failures, and a `Quantity<U, f64>` costs exactly one `f64` at
//! runtime.
//!
//! ```
//! use exact_unit::{kilometers, meters, seconds, MetersPerSecond};
//!
//! let d = meters!(1.0) + kilometers!(1.0);
//! assert_eq!(d, meters!(1001.0));
//! let v = (meters!(6.0) / seconds!(3.0)).cast::<MetersPerSecond, f64>();
//! assert_eq!(format!("{v}"), "2 m/s");
//! ```
//!
//! [`QuantityPoint`] adds absolute positions (altitudes, timestamps) anchored
//! to a typed origin; points difference into quantities, and points on
//! different origins do not mix.

mod dimension;
mod dimensions;
mod exponent;
mod point;
mod quantity;
mod ratio;
mod represent;
mod unit;

pub use crate::{
    dimension::{
        BaseDim, DimExponents, DimPow, DimRoot, Dimension, Prod, Quot, SameDimension,
        BASE_DIMENSION_COUNT,
    },
    dimensions::{
        Acceleration, AmplitudeSpectralDensity, Angle, Dimensionless, ElectricCurrent, Energy,
        Force, Frequency, Length, Mass, MassRate, Momentum, PowerSpectralDensity, Speed, Time,
        Torque, Voltage,
    },
    exponent::Exponent,
    point::{
        quantity_point, quantity_point_cast, DynamicOrigin, MeanSeaLevel, Origin, QuantityPoint,
        UnixEpoch,
    },
    quantity::{quantity_cast, Quantity},
    ratio::Ratio,
    represent::{LosslessInto, Promote, RepCast, Representation},
    unit::{
        centimeters::Centimeters,
        conversion_factor, conversion_ratio,
        degrees::Degrees,
        feet::Feet,
        gigaelectronvolts::GigaElectronVolts,
        hertz::Hertz,
        hours::Hours,
        joules::Joules,
        kilogram_meters_per_second::KilogramMetersPerSecond,
        kilograms::Kilograms,
        kilograms_per_hour::KilogramsPerHour,
        kilometers::Kilometers,
        kilometers_per_hour::KilometersPerHour,
        meters::Meters,
        meters_per_second::MetersPerSecond,
        millimeters::Millimeters,
        natural::{
            speed_of_light, GigaElectronVoltsPerLightSpeed, GigaElectronVoltsPerLightSpeedSquared,
            LIGHT_SPEED_M_PER_S,
        },
        newton_meters::NewtonMeters,
        newtons::Newtons,
        radians::Radians,
        scalar::One,
        seconds::Seconds,
        spectral::{SquareVoltsPerHertz, VoltsPerRootHertz},
        volts::Volts,
        Unit, UnitPow, UnitProd, UnitQuot, UnitRoot,
    },
};
pub use ordered_float::OrderedFloat;
