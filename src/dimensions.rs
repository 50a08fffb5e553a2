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

//! The dimension catalog: declarative markers composing the base axes.
//! These carry no behavior of their own; everything flows through
//! `Dimension::EXPONENTS`.
use crate::dimension::{BaseDim, DimExponents, Dimension};

macro_rules! declare_dimension {
    ($Name:ident, $name:literal, $exponents:expr) => {
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $Name;
        impl Dimension for $Name {
            const EXPONENTS: DimExponents = $exponents;
            const DIM_NAME: &'static str = $name;
        }
    };
}

// Base dimensions.
declare_dimension!(Dimensionless, "dimensionless", DimExponents::DIMENSIONLESS);
declare_dimension!(Length, "length", DimExponents::base(BaseDim::Length));
declare_dimension!(Mass, "mass", DimExponents::base(BaseDim::Mass));
declare_dimension!(Time, "time", DimExponents::base(BaseDim::Time));
declare_dimension!(
    ElectricCurrent,
    "electric current",
    DimExponents::base(BaseDim::Current)
);
declare_dimension!(Angle, "angle", DimExponents::base(BaseDim::Angle));

// Derived dimensions.
declare_dimension!(Frequency, "frequency", Time::EXPONENTS.recip());
declare_dimension!(Speed, "speed", Length::EXPONENTS.divide(Time::EXPONENTS));
declare_dimension!(
    Acceleration,
    "acceleration",
    Speed::EXPONENTS.divide(Time::EXPONENTS)
);
declare_dimension!(
    Force,
    "force",
    Mass::EXPONENTS.multiply(Acceleration::EXPONENTS)
);
declare_dimension!(
    Energy,
    "energy",
    Force::EXPONENTS.multiply(Length::EXPONENTS)
);
declare_dimension!(
    Momentum,
    "momentum",
    Mass::EXPONENTS.multiply(Speed::EXPONENTS)
);
// Same exponents as energy; the markers stay distinct and bridge by cast.
declare_dimension!(
    Torque,
    "torque",
    Force::EXPONENTS.multiply(Length::EXPONENTS)
);
declare_dimension!(
    Voltage,
    "voltage",
    Energy::EXPONENTS
        .divide(ElectricCurrent::EXPONENTS)
        .divide(Time::EXPONENTS)
);
declare_dimension!(
    PowerSpectralDensity,
    "power spectral density",
    Voltage::EXPONENTS.pow(2).divide(Frequency::EXPONENTS)
);
declare_dimension!(
    AmplitudeSpectralDensity,
    "amplitude spectral density",
    PowerSpectralDensity::EXPONENTS.root(2)
);
declare_dimension!(MassRate, "mass rate", Mass::EXPONENTS.divide(Time::EXPONENTS));
