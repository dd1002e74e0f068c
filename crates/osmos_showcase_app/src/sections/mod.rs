// SPDX-License-Identifier: MIT OR Apache-2.0
//! Page sections.

pub mod approach;
pub mod contact;
pub mod demo;
pub mod footer;
pub mod hero;

pub use approach::ApproachSection;
pub use contact::ContactSection;
pub use demo::DemoSection;
pub use footer::FooterSection;
pub use hero::HeroSection;
