use numpy::ndarray::{Array2, ArrayView2};
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::apriori::Apriori;
use crate::config::AprioriConfig;
use crate::error::AprioriError;

impl From<AprioriError> for PyErr {
    fn from(err: AprioriError) -> Self {
        match err {
            AprioriError::InvalidConfig { .. } => PyValueError::new_err(err.to_string()),
            AprioriError::Internal { .. } => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

/// Column indices of the non-zero cells of each row
fn matrix_to_transactions(transactions: ArrayView2<i32>) -> Vec<Vec<String>> {
    transactions
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell != 0)
                .map(|(col, _)| col.to_string())
                .collect()
        })
        .collect()
}

#[pyfunction]
#[pyo3(name = "apriori", signature = (transactions, min_support, min_confidence, max_len=10))]
fn apriori_py(
    transactions: Vec<Vec<String>>,
    min_support: f64,
    min_confidence: f64,
    max_len: usize,
) -> PyResult<Vec<(Vec<String>, Vec<String>, f64, f64)>> {
    let config = AprioriConfig::new(min_support, min_confidence).with_max_len(max_len);
    let rules = Apriori::new(transactions, config)?.solve()?;

    Ok(rules
        .into_iter()
        .map(|rule| {
            (
                rule.condition().to_vec(),
                rule.result().to_vec(),
                rule.confidence(),
                rule.support(),
            )
        })
        .collect())
}

#[pyfunction]
#[pyo3(name = "frequent_itemsets", signature = (transactions, min_support, max_len=10))]
fn frequent_itemsets_py<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
    max_len: usize,
) -> PyResult<Vec<Bound<'py, PyArray2<usize>>>> {
    let transaction_list = matrix_to_transactions(transactions.as_array());
    let config = AprioriConfig::new(min_support, 0.0).with_max_len(max_len);
    let mut apriori = Apriori::new(transaction_list, config)?;
    apriori.solve()?;

    let index = apriori.index();
    let mut result = Vec::new();

    for level in apriori.levels() {
        if level.is_empty() {
            continue;
        }

        let itemset_size = level.itemset_size();
        let num_itemsets = level.len();
        let mut data = vec![0usize; num_itemsets * itemset_size];

        for (i, itemset) in level.iter_itemsets().enumerate() {
            // item ids follow first occurrence, columns do not
            let mut columns = itemset
                .iter()
                .map(|&id| {
                    index
                        .decode(id)
                        .and_then(|label| label.parse::<usize>().ok())
                        .ok_or_else(|| {
                            AprioriError::internal(format!("item id {} has no column", id))
                        })
                })
                .collect::<Result<Vec<usize>, _>>()?;
            columns.sort_unstable();
            data[i * itemset_size..(i + 1) * itemset_size].copy_from_slice(&columns);
        }

        let array = Array2::from_shape_vec((num_itemsets, itemset_size), data)
            .map_err(|_| PyValueError::new_err("Failed to create array"))?;

        result.push(array.into_pyarray(py));
    }

    Ok(result)
}

#[pymodule]
#[pyo3(name = "apriori")]
fn apriori_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(apriori_py, m)?)?;
    m.add_function(wrap_pyfunction!(frequent_itemsets_py, m)?)?;
    Ok(())
}
