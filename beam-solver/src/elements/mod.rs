//! Beam properties: materials, sections, supports and station profiles

mod material;
mod profile;
mod section;
mod support;

pub use material::Material;
pub use profile::SectionProfile;
pub use section::Section;
pub use support::Support;
