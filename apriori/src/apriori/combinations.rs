/// Visit every `k`-combination of `items` in lexicographic index order.
///
/// Combinations of an ascending slice come out ascending.
pub fn for_each_combination<F>(items: &[usize], k: usize, callback: &mut F)
where
    F: FnMut(&[usize]),
{
    if k == 0 || k > items.len() {
        return;
    }

    let mut current = Vec::with_capacity(k);
    generate_combinations_recursive(items, k, 0, &mut current, callback);
}

/// Collect every `k`-combination of `items`
pub fn combinations(items: &[usize], k: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    for_each_combination(items, k, &mut |combination: &[usize]| {
        result.push(combination.to_vec())
    });
    result
}

fn generate_combinations_recursive<F>(
    items: &[usize],
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    // stop early once too few items remain to fill the combination
    let needed = k - current.len();
    for i in start..=items.len() - needed {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
