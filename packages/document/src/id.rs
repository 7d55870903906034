use crc32fast::Hasher;

/// Derive a stable document seed from a scope string (template id, user id,
/// or any host-chosen handle).
pub fn document_seed(scope: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(scope.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential block id generator scoped to one document.
///
/// Ids have the shape `"{seed}-{n}"`. Within one generator's lifetime an id
/// is never handed out twice; [`IdGenerator::resync`] keeps that guarantee
/// across template loads.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(scope: &str) -> Self {
        Self {
            seed: document_seed(scope),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate the next id.
    pub fn fresh(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Advance the counter past any id that already uses this generator's
    /// seed, so rehydrated documents keep producing unique ids.
    pub fn resync<'a>(&mut self, existing: impl IntoIterator<Item = &'a str>) {
        let prefix = format!("{}-", self.seed);
        for id in existing {
            if let Some(suffix) = id.strip_prefix(&prefix) {
                if let Ok(n) = suffix.parse::<u32>() {
                    self.count = self.count.max(n);
                }
            }
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
