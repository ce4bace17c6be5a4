//! Team chromosomes and the genetic operators that act on them.
//!
//! A chromosome is an ordered sequence of exactly `team_size` pairwise
//! distinct candidate pool indices. Order is semantically irrelevant (a
//! chromosome represents a set) but the order crossover operator works
//! positionally, so the sequence is kept as-is rather than normalized.
//!
//! Both operators preserve the distinctness invariant by construction:
//!
//! - [`order_crossover`] fills non-segment positions only with genes absent
//!   from the transplanted segment
//! - [`mutate`] draws replacements from the complement of the current
//!   (possibly already mutated) gene set, so even a mutation rate of 1.0
//!   cannot introduce duplicates

use rand::{
    Rng,
    seq::{IndexedRandom as _, index},
};

/// A candidate team: `team_size` distinct pool indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chromosome {
    genes: Vec<usize>,
}

impl Chromosome {
    /// Samples a random team: `team_size` distinct indices drawn uniformly
    /// without replacement from `[0, pool_size)`.
    ///
    /// # Panics
    ///
    /// Panics if `team_size > pool_size`; parameter validation rejects that
    /// combination before any sampling happens.
    pub fn random<R>(rng: &mut R, pool_size: usize, team_size: usize) -> Self
    where
        R: Rng + ?Sized,
    {
        assert!(team_size <= pool_size, "team size exceeds pool size");
        let genes = index::sample(rng, pool_size, team_size).into_vec();
        Self { genes }
    }

    /// Wraps an existing gene sequence.
    #[cfg(test)]
    pub(crate) fn from_genes(genes: Vec<usize>) -> Self {
        Self { genes }
    }

    /// The pool indices of the team members, in chromosome order.
    #[must_use]
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Number of genes (the team size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome holds no genes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Whether any gene occurs more than once.
    ///
    /// Structurally impossible after initialization and the operators in
    /// this module; the fitness evaluator still checks defensively.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.genes
            .iter()
            .enumerate()
            .any(|(i, gene)| self.genes[..i].contains(gene))
    }
}

/// Order crossover (OX) between two equal-length parents.
///
/// With probability `crossover_rate`, picks a random segment
/// `[start, end]` (`start < end`) and builds each child by copying one
/// parent's segment verbatim and filling the remaining positions, in
/// order, with the other parent's genes that do not appear in that
/// segment. Otherwise returns unmodified copies of both parents.
///
/// Chromosomes shorter than two genes have no non-trivial segment and are
/// always returned as copies.
///
/// # Panics
///
/// Panics if the parents have different lengths.
pub fn order_crossover<R>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    crossover_rate: f64,
    rng: &mut R,
) -> (Chromosome, Chromosome)
where
    R: Rng + ?Sized,
{
    assert_eq!(parent1.len(), parent2.len(), "parent length mismatch");
    let size = parent1.len();
    if size < 2 || !rng.random_bool(crossover_rate) {
        return (parent1.clone(), parent2.clone());
    }

    let start = rng.random_range(0..size - 1);
    let end = rng.random_range(start + 1..size);

    let child1 = fill_from_segment(parent1, parent2, start, end);
    let child2 = fill_from_segment(parent2, parent1, start, end);
    (child1, child2)
}

/// Builds one OX child: `segment_parent`'s `[start, end]` genes stay in
/// place, every other position takes the next `filler_parent` gene that is
/// not in the segment.
fn fill_from_segment(
    segment_parent: &Chromosome,
    filler_parent: &Chromosome,
    start: usize,
    end: usize,
) -> Chromosome {
    let segment = &segment_parent.genes[start..=end];
    let mut remaining = filler_parent
        .genes
        .iter()
        .copied()
        .filter(|gene| !segment.contains(gene));

    let genes = (0..segment_parent.len())
        .map(|i| {
            if (start..=end).contains(&i) {
                segment_parent.genes[i]
            } else {
                // Filler always suffices: the filler parent has `size`
                // distinct genes and at most `segment.len()` of them are
                // excluded, leaving >= size - (end - start + 1) candidates.
                remaining.next().unwrap()
            }
        })
        .collect();
    Chromosome { genes }
}

/// Mutates a chromosome in place.
///
/// Each gene position is independently replaced, with probability
/// `mutation_rate`, by an index drawn uniformly from the candidates not
/// currently in the team. The complement is recomputed against the current
/// chromosome contents for every replacement. When the team spans the whole
/// pool the complement is empty and mutation is a no-op.
pub fn mutate<R>(chromosome: &mut Chromosome, pool_size: usize, mutation_rate: f64, rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in 0..chromosome.genes.len() {
        if rng.random_bool(mutation_rate) {
            let outside = (0..pool_size)
                .filter(|candidate| !chromosome.genes.contains(candidate))
                .collect::<Vec<_>>();
            if let Some(&replacement) = outside.choose(rng) {
                chromosome.genes[i] = replacement;
            }
        }
    }
}
