/// The one capability the convergence loop needs: produce the next generation as a
/// fresh value, leaving the current one untouched.
pub trait Automaton: Sized {
    /// Compute the next generation from this snapshot.
    fn tick(&self) -> Self;
}

/// Tick `seed` until a generation reproduces itself, and return that stable
/// generation.
///
/// Convergence is detected by value equality of consecutive snapshots, since every
/// tick allocates a new one. Termination is the caller's bargain: automata whose
/// rules never settle (most sparse universes) will loop forever.
pub fn fixed_point<A>(seed: A) -> A
where
    A: Automaton + PartialEq,
{
    let mut current = seed;
    loop {
        let next = current.tick();
        if next == current {
            return current;
        }
        current = next;
    }
}
