// ─────────────────────────────────────────────────────────────────────────────
// Energy and macro targets
// ─────────────────────────────────────────────────────────────────────────────

/// Mifflin–St Jeor sex constant for males.
pub const BMR_MALE_OFFSET: f64 = 5.0;

/// Mifflin–St Jeor sex constant for everyone else.
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Activity factor used for unrecognized activity labels.
pub const DEFAULT_ACTIVITY_FACTOR: f64 = 1.55;

/// Daily calorie adjustment for loss and gain goals.
pub const GOAL_KCAL_ADJUSTMENT: f64 = 300.0;

/// Hard floor on weight-loss calorie targets.
pub const MIN_LOSS_KCAL: f64 = 1200.0;

/// Energy per gram of protein and carbohydrate.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Energy per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Energy content of one kilogram of body weight.
pub const KCAL_PER_KG_BODY_WEIGHT: f64 = 7700.0;

// ─────────────────────────────────────────────────────────────────────────────
// Ranking and quantity solving
// ─────────────────────────────────────────────────────────────────────────────

/// Floor for divisors so zero-calorie or zero-nutrient rows never divide by zero.
pub const DENSITY_EPSILON: f64 = 1e-9;

/// Candidates kept per density axis.
pub const POOL_SIZE: usize = 50;

// ─────────────────────────────────────────────────────────────────────────────
// Allocator phases
// ─────────────────────────────────────────────────────────────────────────────

/// Protein-dense foods tried as anchors.
pub const PROTEIN_ANCHOR_COUNT: usize = 3;

/// Share of the current protein residual each anchor aims for.
pub const PROTEIN_ANCHOR_FRACTION: f64 = 0.5;

/// Gram range for a protein anchor.
pub const PROTEIN_MIN_GRAMS: f64 = 30.0;
pub const PROTEIN_MAX_GRAMS: f64 = 250.0;

/// Carb-dense foods tried after the anchors.
pub const CARB_PICK_COUNT: usize = 2;

/// Share of the current carb residual each carb pick aims for.
pub const CARB_PICK_FRACTION: f64 = 0.7;

/// Gram range for a carb pick.
pub const CARB_MIN_GRAMS: f64 = 40.0;
pub const CARB_MAX_GRAMS: f64 = 250.0;

/// Gram range for the fat top-up.
pub const FAT_MIN_GRAMS: f64 = 10.0;
pub const FAT_MAX_GRAMS: f64 = 60.0;

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Columns every catalog file must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "food_name",
    "kcal_per_100g",
    "protein_per_100g",
    "carbs_per_100g",
    "fat_per_100g",
];

/// Minimum Jaro–Winkler score for a fuzzy food-name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;
