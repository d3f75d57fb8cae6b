/// Tracks which of a fixed set of items currently carries the greatest
/// visibility weight; used to show which file is foremost in a scrollable
/// multi-file pane.
///
/// The item set is fixed at construction with every weight at 0 and the
/// first registered item dominant. The caller reports a new weight whenever
/// one changes (including a drop to 0 when a file leaves view); meaningful
/// weights, e.g. visible-area fractions, are the caller's business.
#[derive(Debug, Clone)]
pub struct DominantItemTracker {
    // Registration order is the tie-break order; never reordered.
    items: Vec<String>,
    weights: Vec<f64>,
    dominant: Option<usize>,
    publishes: u64,
}

impl DominantItemTracker {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let weights = vec![0.0; items.len()];
        let dominant = if items.is_empty() { None } else { Some(0) };

        Self {
            items,
            weights,
            dominant,
            publishes: 0,
        }
    }

    /// The currently dominant item, `None` only for an empty item set.
    pub fn current_item(&self) -> Option<&str> {
        self.dominant.map(|i| self.items[i].as_str())
    }

    /// Number of dominance changes published so far. Redundant reports that
    /// leave the dominant item unchanged do not bump this.
    pub fn publish_count(&self) -> u64 {
        self.publishes
    }

    /// Update `item`'s weight and recompute dominance. Returns whether the
    /// dominant item changed. Reporting an unregistered item is a caller
    /// bug and fails.
    ///
    /// The previous dominant item retains dominance unless another item's
    /// weight strictly exceeds it; scanning in registration order makes
    /// exact ties deterministic.
    pub fn report(&mut self, item: &str, weight: f64) -> Result<bool, String> {
        let index = self
            .items
            .iter()
            .position(|name| name == item)
            .ok_or_else(|| format!("Unknown item '{}' reported to DominantItemTracker", item))?;

        self.weights[index] = weight;

        let previous = match self.dominant {
            Some(i) => i,
            None => return Ok(false),
        };

        let mut max_index = previous;
        let mut max_weight = self.weights[previous];
        for (i, &w) in self.weights.iter().enumerate() {
            if w > max_weight {
                max_index = i;
                max_weight = w;
            }
        }

        if max_index != previous {
            self.dominant = Some(max_index);
            self.publishes += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
