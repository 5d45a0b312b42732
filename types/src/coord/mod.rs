//! The kinds of angles used in the equatorial and geographic coordinate systems.

pub use self::{
    declination::{Declination, DeclinationRange, Latitude},
    longitude::{Longitude, LongitudeRange},
    right_ascension::{Ra, RightAscension, RightAscensionRange},
};

mod declination;
mod longitude;
mod right_ascension;
