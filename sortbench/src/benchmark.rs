//! The build-then-drain benchmarks of both stores
//!
//! Each benchmark allocates its backing memory, measures the build phase immediately followed by
//! the drain phase with [`measure`] and releases the memory afterwards. Allocation and release are
//! never part of the measured interval.

use log::debug;

use crate::error::Error;
use crate::random::RandomSource;
use crate::store::array::SortedArray;
use crate::store::chain::SortedChain;
use crate::store::pool::NodePool;
use crate::store::to_value;
use crate::timing::{measure, Measurement, StoreKind};

/// Run the build and drain phases of the [`SortedArray`] and measure the elapsed time
///
/// The array is allocated with a capacity of `size`, filled with `size` values drawn in
/// `[0, size)` and then emptied by deleting at random positions.
pub fn benchmark_array<R>(size: usize, random: &mut R) -> Result<Measurement, Error>
where
    R: RandomSource + ?Sized,
{
    check_size(size)?;

    let mut array = SortedArray::with_capacity(size);
    debug!("Allocated array with a capacity of {size} values");

    let (elapsed, result) = measure(|| {
        let insertions = build_array(&mut array, random)?;
        let deletions = drain_array(&mut array, random)?;
        Ok::<_, Error>((insertions, deletions))
    });
    let (insertions, deletions) = result?;

    debug!(
        "Array of size {size}: {insertions} insertions and {deletions} deletions took {:.6}s",
        elapsed.as_secs_f64()
    );
    drop(array);

    Ok(Measurement {
        deletions,
        elapsed,
        insertions,
        size,
        store: StoreKind::Array,
    })
}

/// Run the build and drain phases of the [`SortedChain`] and measure the elapsed time
///
/// All `size` nodes are allocated up front in a [`NodePool`]. The chain is built by inserting
/// `size` values drawn in `[0, size)` and then emptied by unlinking nodes at random positions. The
/// pool is released in bulk after the measured interval.
pub fn benchmark_linked_list<R>(size: usize, random: &mut R) -> Result<Measurement, Error>
where
    R: RandomSource + ?Sized,
{
    check_size(size)?;

    let mut pool = NodePool::allocate(size);
    let mut chain = SortedChain::new();
    debug!("Allocated node pool with {size} nodes");

    let (elapsed, result) = measure(|| {
        let insertions = build_chain(&mut chain, &mut pool, random)?;
        let deletions = drain_chain(&mut chain, &mut pool, random)?;
        Ok::<_, Error>((insertions, deletions))
    });
    let (insertions, deletions) = result?;

    debug!(
        "Linked list of size {size}: {insertions} insertions and {deletions} deletions took \
         {:.6}s",
        elapsed.as_secs_f64()
    );
    let released = pool.release();
    debug!("Released {released} nodes");

    Ok(Measurement {
        deletions,
        elapsed,
        insertions,
        size,
        store: StoreKind::LinkedList,
    })
}

/// Fill the `array` to its capacity with values drawn in `[0, capacity)`
///
/// Returns the number of insertions.
pub fn build_array<R>(array: &mut SortedArray, random: &mut R) -> Result<usize, Error>
where
    R: RandomSource + ?Sized,
{
    let size = array.capacity();
    let mut insertions = 0;
    for _ in array.len()..size {
        array.insert(to_value(random.next_below(size)))?;
        insertions += 1;
    }
    Ok(insertions)
}

/// Fill the `chain` with one value per unused node of the `pool` drawn in `[0, capacity)`
///
/// Returns the number of insertions.
pub fn build_chain<R>(
    chain: &mut SortedChain,
    pool: &mut NodePool,
    random: &mut R,
) -> Result<usize, Error>
where
    R: RandomSource + ?Sized,
{
    let size = pool.capacity();
    let mut insertions = 0;
    for _ in pool.acquired()..size {
        let node = pool.acquire(to_value(random.next_below(size)))?;
        chain.insert(pool, node);
        insertions += 1;
    }
    Ok(insertions)
}

/// Delete values at random positions until the `array` is empty
///
/// Every position is drawn in `[0, len)` with `len` being the logical length before the deletion.
/// Returns the number of deletions.
pub fn drain_array<R>(array: &mut SortedArray, random: &mut R) -> Result<usize, Error>
where
    R: RandomSource + ?Sized,
{
    let mut deletions = 0;
    while !array.is_empty() {
        array.remove(random.next_below(array.len()))?;
        deletions += 1;
    }
    Ok(deletions)
}

/// Unlink nodes at random positions until the `chain` is empty
///
/// Every position is drawn in `[0, len)` with `len` being the length before the deletion. Unlinked
/// nodes stay in the `pool`. Returns the number of deletions.
pub fn drain_chain<R>(
    chain: &mut SortedChain,
    pool: &mut NodePool,
    random: &mut R,
) -> Result<usize, Error>
where
    R: RandomSource + ?Sized,
{
    let mut deletions = 0;
    while !chain.is_empty() {
        chain.remove_at(pool, random.next_below(chain.len()))?;
        deletions += 1;
    }
    Ok(deletions)
}

fn check_size(size: usize) -> Result<(), Error> {
    if size == 0 {
        Err(Error::InvalidSize(size))
    } else {
        Ok(())
    }
}
