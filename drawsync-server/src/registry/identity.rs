use rand::seq::SliceRandom;

const ADJECTIVES: &[&str] = &[
    "Happy",
    "Creative",
    "Energetic",
    "Lively",
    "Dynamic",
    "Radiant",
    "Joyful",
    "Vibrant",
    "Cheerful",
    "Sunny",
    "Sparkling",
    "Bright",
    "Shining",
];

const ANIMALS: &[&str] = &[
    "Dolphin",
    "Tiger",
    "Elephant",
    "Penguin",
    "Kangaroo",
    "Panther",
    "Lion",
    "Cheetah",
    "Giraffe",
    "Hippopotamus",
    "Monkey",
    "Panda",
    "Crocodile",
];

/// Colours handed out to connections that have not picked one.
pub const PALETTE: &[&str] = &[
    "#ef4444", "#f59e0b", "#10b981", "#3b82f6", "#8b5cf6", "#ec4899",
];

/// "<Adjective> <Animal>", used until the client sends its own name.
pub fn generate_name() -> String {
    let mut rng = rand::thread_rng();
    let adjective = ADJECTIVES.choose(&mut rng).copied().unwrap_or("Anonymous");
    let animal = ANIMALS.choose(&mut rng).copied().unwrap_or("User");
    format!("{adjective} {animal}")
}

pub fn generate_color() -> String {
    PALETTE
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(PALETTE[0])
        .to_owned()
}
