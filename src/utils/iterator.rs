//! Iterator utilities for parallel and sequential iterators according to the feature flag `parallel`

#[cfg(not(feature = "parallel"))]
/// Get an iterator for the array
pub(crate) fn get_iterator_mut<V>(array: &mut [V]) -> std::slice::IterMut<'_, V> {
    array.iter_mut()
}

#[cfg(feature = "parallel")]
/// Get parallel iterator for the array
pub(crate) fn get_iterator_mut<V: Send>(array: &mut [V]) -> rayon::slice::IterMut<'_, V> {
    use rayon::iter::IntoParallelRefMutIterator as _;
    array.par_iter_mut()
}
