//! Figures of S. T. Bok (1929), "Der Einfluß der in den Furchen und Windungen
//! auftretenden Krümmungen der Großhirnrinde auf die Rindenarchitektur".
//!
//! The categorical (Figure 18) and quantitative (Table 1) charts are both
//! built as a pure layout step followed by a plotters render.
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod paper;
pub mod render;

pub use error::{FigureError, Result};
