//! Hand-written lens tables shaped like generated output for:
//!
//! ```text
//! Person { name: string, address: Person.Address, tags: repeated string }
//! Person.Address { street: string, zip: uint32, geo: Person.Address.Geo }
//! Person.Address.Geo { lat: double }
//! ```

use crate::{
    guard::Guard,
    lens::{Lens, Step, Terminal},
};

pub(crate) const PERSON: &str = "Person";

const ADDRESS: &[Step<'static>] = &[Step::new("address", "Person.Address")];
const ADDRESS_GEO: &[Step<'static>] = &[
    Step::new("address", "Person.Address"),
    Step::new("geo", "Person.Address.Geo"),
];

pub(crate) const NAME: Lens<'static> =
    Lens::new(PERSON, &[], Terminal::new("name", Guard::Text, None));

pub(crate) const ADDRESS_STREET: Lens<'static> =
    Lens::new(PERSON, ADDRESS, Terminal::new("street", Guard::Text, None));

pub(crate) const ADDRESS_ZIP: Lens<'static> =
    Lens::new(PERSON, ADDRESS, Terminal::new("zip", Guard::Unsigned, None));

pub(crate) const ADDRESS_GEO_LAT: Lens<'static> =
    Lens::new(PERSON, ADDRESS_GEO, Terminal::new("lat", Guard::Float, None));

pub(crate) const TAGS: Lens<'static> = Lens::new(
    PERSON,
    &[],
    Terminal::new("tags", Guard::Sequence, Some(Guard::Text)),
);

pub(crate) const ALL: [Lens<'static>; 5] = [NAME, ADDRESS_STREET, ADDRESS_ZIP, ADDRESS_GEO_LAT, TAGS];
