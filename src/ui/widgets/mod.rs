//! Reusable UI widgets

pub mod element_select;
