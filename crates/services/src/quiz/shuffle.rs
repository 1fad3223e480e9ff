use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Where question order comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShuffleSource {
    /// Thread-local RNG, different order on every shuffle.
    #[default]
    Thread,
    /// Seeded RNG. The sequence of orders is reproducible from the seed.
    Seeded(u64),
    /// Keep the input order.
    Identity,
}

pub(crate) enum Shuffler {
    Thread,
    Seeded(StdRng),
    Identity,
}

impl Shuffler {
    pub(crate) fn new(source: ShuffleSource) -> Self {
        match source {
            ShuffleSource::Thread => Self::Thread,
            ShuffleSource::Seeded(seed) => Self::Seeded(StdRng::seed_from_u64(seed)),
            ShuffleSource::Identity => Self::Identity,
        }
    }

    pub(crate) fn shuffle<T>(&mut self, items: &mut [T]) {
        match self {
            Self::Thread => items.shuffle(&mut rand::rng()),
            Self::Seeded(rng) => items.shuffle(rng),
            Self::Identity => {}
        }
    }
}
