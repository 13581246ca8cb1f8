//! FactorioLab catalog format - the converter's output model

pub mod types;

pub use types::{
    Category, Defaults, Icon, Item, LabData, MachineCaps, PLACEHOLDER_POSITION, PowerType,
    QuantityMap, RECIPE_COST, Recipe, TransportCaps,
};
