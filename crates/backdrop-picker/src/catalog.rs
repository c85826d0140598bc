//! Built-in search terms used when none are configured.

pub const DEFAULT_QUERIES: &[&str] = &[
    "ocean", "nature", "landscape", "mountains", "forest", "sunset", "beach", "sky",
    "lake", "river", "valley", "desert", "canyon", "waterfall", "meadow", "field",
    "coast", "cliff", "island", "bay", "harbor", "lighthouse", "bridge", "path",
    "trail", "garden", "park", "tree", "flower", "cloud", "storm", "rainbow",
    "aurora", "milky way", "stars", "moon", "sunrise", "twilight", "mist", "fog",
    "space", "galaxy", "nebula", "planet", "earth", "mars", "jupiter", "saturn",
    "universe", "cosmos", "astronomy", "solar system", "black hole", "supernova",
    "constellation", "meteor", "comet", "asteroid", "space station", "satellite",
];

pub fn default_catalog() -> Vec<String> {
    DEFAULT_QUERIES.iter().map(|q| q.to_string()).collect()
}
