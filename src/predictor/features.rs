//! Predictor feature schema
//!
//! The external model reads its inputs positionally, so argument order is part
//! of its contract. [`PredictorFeature::ALL`] is the only place that order is
//! written down; [`FeatureVector::value`] binds each position to exactly one
//! resolved input field through an exhaustive match, so adding or reordering a
//! feature cannot silently shift the others.

use crate::input::PredictionInput;

/// Number of positional arguments the predictor expects
pub const FEATURE_COUNT: usize = 19;

/// Model features in the predictor's trained column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictorFeature {
    BodyType,
    Sex,
    Diet,
    ShowerFrequency,
    TvPcDailyHours,
    WasteBagSize,
    NewClothesMonthly,
    InternetDailyHours,
    EnergyEfficiency,
    Recycling,
    CookingWith,
    HeatingEnergySource,
    Transport,
    VehicleType,
    SocialActivity,
    MonthlyGroceryBill,
    AirTravelFrequency,
    VehicleMonthlyDistanceKm,
    WasteBagWeeklyCount,
}

impl PredictorFeature {
    pub const ALL: [PredictorFeature; FEATURE_COUNT] = [
        PredictorFeature::BodyType,
        PredictorFeature::Sex,
        PredictorFeature::Diet,
        PredictorFeature::ShowerFrequency,
        PredictorFeature::TvPcDailyHours,
        PredictorFeature::WasteBagSize,
        PredictorFeature::NewClothesMonthly,
        PredictorFeature::InternetDailyHours,
        PredictorFeature::EnergyEfficiency,
        PredictorFeature::Recycling,
        PredictorFeature::CookingWith,
        PredictorFeature::HeatingEnergySource,
        PredictorFeature::Transport,
        PredictorFeature::VehicleType,
        PredictorFeature::SocialActivity,
        PredictorFeature::MonthlyGroceryBill,
        PredictorFeature::AirTravelFrequency,
        PredictorFeature::VehicleMonthlyDistanceKm,
        PredictorFeature::WasteBagWeeklyCount,
    ];

    /// Column name used when the model was trained
    pub fn column_name(self) -> &'static str {
        match self {
            PredictorFeature::BodyType => "Body Type",
            PredictorFeature::Sex => "Sex",
            PredictorFeature::Diet => "Diet",
            PredictorFeature::ShowerFrequency => "How Often Shower",
            PredictorFeature::TvPcDailyHours => "How Long TV PC Daily Hour",
            PredictorFeature::WasteBagSize => "Waste Bag Size",
            PredictorFeature::NewClothesMonthly => "How Many New Clothes Monthly",
            PredictorFeature::InternetDailyHours => "How Long Internet Daily Hour",
            PredictorFeature::EnergyEfficiency => "Energy efficiency",
            PredictorFeature::Recycling => "Recycling",
            PredictorFeature::CookingWith => "Cooking_With",
            PredictorFeature::HeatingEnergySource => "Heating Energy Source",
            PredictorFeature::Transport => "Transport",
            PredictorFeature::VehicleType => "Vehicle Type",
            PredictorFeature::SocialActivity => "Social Activity",
            PredictorFeature::MonthlyGroceryBill => "Monthly Grocery Bill",
            PredictorFeature::AirTravelFrequency => "Frequency of Traveling by Air",
            PredictorFeature::VehicleMonthlyDistanceKm => "Vehicle Monthly Distance Km",
            PredictorFeature::WasteBagWeeklyCount => "Waste Bag Weekly Count",
        }
    }

    /// 0-based argument position
    pub fn position(self) -> usize {
        self as usize
    }
}

/// A single feature value as handed to the predictor
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Categorical(String),
    Numeric(f64),
}

impl FeatureValue {
    /// Command-line rendering (integral numbers carry no fractional part)
    pub fn to_arg(&self) -> String {
        match self {
            FeatureValue::Categorical(s) => s.clone(),
            FeatureValue::Numeric(n) => format!("{}", n),
        }
    }
}

/// Feature values derived from a resolved input, addressable by feature
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    input: PredictionInput,
}

impl FeatureVector {
    pub fn from_input(input: &PredictionInput) -> Self {
        Self { input: input.clone() }
    }

    pub fn value(&self, feature: PredictorFeature) -> FeatureValue {
        let input = &self.input;
        let text = |s: &String| FeatureValue::Categorical(s.clone());
        match feature {
            PredictorFeature::BodyType => text(&input.body_type),
            PredictorFeature::Sex => text(&input.sex),
            PredictorFeature::Diet => text(&input.diet),
            PredictorFeature::ShowerFrequency => text(&input.shower_frequency),
            PredictorFeature::TvPcDailyHours => FeatureValue::Numeric(input.tv_hours),
            PredictorFeature::WasteBagSize => text(&input.waste_bag_size),
            PredictorFeature::NewClothesMonthly => FeatureValue::Numeric(input.new_clothes),
            PredictorFeature::InternetDailyHours => FeatureValue::Numeric(input.internet_hours),
            PredictorFeature::EnergyEfficiency => text(&input.energy_efficiency),
            PredictorFeature::Recycling => text(&input.recycling),
            PredictorFeature::CookingWith => text(&input.cooking_with),
            PredictorFeature::HeatingEnergySource => text(&input.heating_source),
            PredictorFeature::Transport => text(&input.transport),
            PredictorFeature::VehicleType => text(&input.vehicle_type),
            PredictorFeature::SocialActivity => text(&input.social_activity),
            PredictorFeature::MonthlyGroceryBill => FeatureValue::Numeric(input.grocery_bill),
            PredictorFeature::AirTravelFrequency => text(&input.air_travel),
            PredictorFeature::VehicleMonthlyDistanceKm => {
                FeatureValue::Numeric(input.vehicle_distance)
            }
            PredictorFeature::WasteBagWeeklyCount => FeatureValue::Numeric(input.waste_count),
        }
    }

    /// Positional arguments in trained column order
    pub fn to_args(&self) -> [String; FEATURE_COUNT] {
        PredictorFeature::ALL.map(|feature| self.value(feature).to_arg())
    }

    /// `Column=value` pairs in argument order, for logs
    pub fn describe(&self) -> String {
        PredictorFeature::ALL
            .iter()
            .map(|&feature| format!("{}={}", feature.column_name(), self.value(feature).to_arg()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Stable key for caching estimates of identical inputs
    pub fn cache_key(&self) -> String {
        self.to_args().join("\u{1f}")
    }
}
