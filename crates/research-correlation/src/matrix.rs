//! Correlation matrices over several variables

use crate::coefficient::correlate_complete;
use crate::{Correlation, CorrelationOptions, Deletion};
use research_core::{complete_pairs, is_observed, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Symmetric matrices of coefficients, p-values and pair counts
///
/// Entry `[i][j]` relates `variables[i]` and `variables[j]`. The diagonal
/// holds `r = 1` and `p = 0` for every variable with spread, NaN otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub variables: Vec<String>,
    pub options: CorrelationOptions,
    pub r: Vec<Vec<f64>>,
    pub p_values: Vec<Vec<f64>>,
    pub n: Vec<Vec<usize>>,
}

/// One off-diagonal entry of a [`CorrelationMatrix`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairCorrelation {
    pub first: String,
    pub second: String,
    pub correlation: Correlation,
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Entry for variables `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> Option<Correlation> {
        Some(Correlation {
            r: *self.r.get(i)?.get(j)?,
            p_value: self.p_values[i][j],
            n: self.n[i][j],
        })
    }

    /// Every pair `i < j` in row-major order
    pub fn pairs(&self) -> Vec<PairCorrelation> {
        let k = self.len();
        let mut pairs = Vec::with_capacity(k * k.saturating_sub(1) / 2);
        for i in 0..k {
            for j in (i + 1)..k {
                if let Some(correlation) = self.get(i, j) {
                    pairs.push(PairCorrelation {
                        first: self.variables[i].clone(),
                        second: self.variables[j].clone(),
                        correlation,
                    });
                }
            }
        }
        pairs
    }
}

/// Correlate every pair of named variables
///
/// All variables must have the same length. With [`Deletion::Casewise`]
/// a row is dropped from every pair as soon as any variable is missing in
/// it, so all entries share the same `n`. With [`Deletion::Pairwise`]
/// each pair keeps every row where both of its variables are observed.
///
/// ```
/// use research_correlation::{correlation_matrix, CorrelationOptions};
///
/// let a = [Some(1.0), Some(2.0), Some(3.0), None];
/// let b = [Some(2.0), Some(1.0), Some(4.0), Some(3.0)];
/// let c = [Some(1.0), None, Some(2.0), Some(5.0)];
/// let vars = [("a", &a[..]), ("b", &b[..]), ("c", &c[..])];
///
/// let pairwise = correlation_matrix(&vars, &CorrelationOptions::pairwise()).unwrap();
/// assert_eq!(pairwise.n[1][2], 3);
/// let casewise = correlation_matrix(&vars, &CorrelationOptions::casewise()).unwrap();
/// assert_eq!(casewise.n[1][2], 2);
/// ```
pub fn correlation_matrix(
    variables: &[(&str, &[Option<f64>])],
    options: &CorrelationOptions,
) -> Result<CorrelationMatrix> {
    let rows = variables.first().map_or(0, |(_, values)| values.len());
    for (name, values) in variables {
        if values.len() != rows {
            return Err(Error::size_mismatch(
                rows,
                values.len(),
                &format!("correlation variable '{name}'"),
            ));
        }
    }

    let columns: Vec<Vec<Option<f64>>> = match options.deletion {
        Deletion::Pairwise => variables.iter().map(|(_, v)| v.to_vec()).collect(),
        Deletion::Casewise => {
            let complete: Vec<usize> = (0..rows)
                .filter(|&row| variables.iter().all(|(_, v)| is_observed(&v[row])))
                .collect();
            debug!(rows, complete = complete.len(), "casewise deletion");
            variables
                .iter()
                .map(|(_, v)| complete.iter().map(|&row| v[row]).collect())
                .collect()
        }
    };

    let k = variables.len();
    let mut r = vec![vec![f64::NAN; k]; k];
    let mut p_values = vec![vec![f64::NAN; k]; k];
    let mut n = vec![vec![0; k]; k];

    for i in 0..k {
        for j in i..k {
            let (x, y) = complete_pairs(&columns[i], &columns[j]);
            let mut c = correlate_complete(&x, &y, options.method);
            if i == j && !c.r.is_nan() {
                c.r = 1.0;
                c.p_value = 0.0;
            }
            for (a, b) in [(i, j), (j, i)] {
                r[a][b] = c.r;
                p_values[a][b] = c.p_value;
                n[a][b] = c.n;
            }
        }
    }

    Ok(CorrelationMatrix {
        variables: variables.iter().map(|(name, _)| name.to_string()).collect(),
        options: *options,
        r,
        p_values,
        n,
    })
}
