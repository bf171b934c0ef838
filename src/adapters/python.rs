//! # Python Bindings
//!
//! PyO3 bindings for memocalc.
//!
//! ## Python API
//!
//! ```python
//! from memocalc import Calculator
//!
//! calc = Calculator()
//! calc.add(1, 2)        # 3
//! calc.divide(2, 3)     # 0.6666666666666666
//! calc.sqrt(8)          # 2.83
//!
//! calc.memory = 8
//! calc.memory           # 8
//! calc.memory           # None
//!
//! text = Calculator(stringify=True)
//! text.pow(3, 3)        # '27.0'
//! text.stringify        # AttributeError
//! ```

use pyo3::exceptions::{PyAttributeError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyFloat, PyInt};

use crate::core::config::CalculatorConfig;
use crate::core::{CalcError, Number, Output};
use crate::engine::Calculator as RustCalculator;

impl From<CalcError> for PyErr {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::InvalidArgument(_) => PyValueError::new_err(err.to_string()),
            CalcError::UnsupportedOperation(_) => PyAttributeError::new_err(err.to_string()),
        }
    }
}

/// Convert a Python `int` or `float` to a Number
fn extract_number(value: &Bound<'_, PyAny>) -> PyResult<Number> {
    if value.is_instance_of::<PyInt>() {
        Ok(Number::Int(value.extract::<i64>()?))
    } else if value.is_instance_of::<PyFloat>() {
        Ok(Number::Float(value.extract::<f64>()?))
    } else {
        Err(PyTypeError::new_err(format!(
            "expected int or float, got {}",
            value.get_type().name()?
        )))
    }
}

fn number_to_py(py: Python<'_>, value: Number) -> PyObject {
    match value {
        Number::Int(i) => i.into_py(py),
        Number::Float(f) => f.into_py(py),
    }
}

fn output_to_py(py: Python<'_>, output: Output) -> PyObject {
    match output {
        Output::Number(n) => number_to_py(py, n),
        Output::Text(s) => s.into_py(py),
    }
}

/// Arithmetic calculator with a read-once memory register
///
/// Args:
///     stringify: Return results as strings (default: False)
#[pyclass(name = "Calculator")]
pub struct PyCalculator {
    inner: RustCalculator,
}

#[pymethods]
impl PyCalculator {
    #[new]
    #[pyo3(signature = (stringify = false))]
    fn new(stringify: bool) -> Self {
        Self {
            inner: RustCalculator::new(CalculatorConfig::new().with_stringify(stringify)),
        }
    }

    fn add(&self, py: Python<'_>, a: &Bound<'_, PyAny>, b: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        let out = self.inner.add(extract_number(a)?, extract_number(b)?)?;
        Ok(output_to_py(py, out))
    }

    fn subtract(&self, py: Python<'_>, a: &Bound<'_, PyAny>, b: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        let out = self.inner.subtract(extract_number(a)?, extract_number(b)?)?;
        Ok(output_to_py(py, out))
    }

    fn multiply(&self, py: Python<'_>, a: &Bound<'_, PyAny>, b: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        let out = self.inner.multiply(extract_number(a)?, extract_number(b)?)?;
        Ok(output_to_py(py, out))
    }

    /// Divide a by b
    ///
    /// Raises:
    ///     ValueError: if b is zero
    fn divide(&self, py: Python<'_>, a: &Bound<'_, PyAny>, b: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        let out = self.inner.divide(extract_number(a)?, extract_number(b)?)?;
        Ok(output_to_py(py, out))
    }

    fn pow(&self, py: Python<'_>, a: &Bound<'_, PyAny>, b: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        let out = self.inner.pow(extract_number(a)?, extract_number(b)?)?;
        Ok(output_to_py(py, out))
    }

    /// Square root, rounded to 2 places unless integral
    ///
    /// Raises:
    ///     ValueError: if a is negative
    fn sqrt(&self, py: Python<'_>, a: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        let out = self.inner.sqrt(extract_number(a)?)?;
        Ok(output_to_py(py, out))
    }

    /// Recall memory; clears it. None when empty.
    #[getter]
    fn memory(&mut self, py: Python<'_>) -> Option<PyObject> {
        self.inner.memory().map(|out| output_to_py(py, out))
    }

    #[setter]
    fn set_memory(&mut self, value: Bound<'_, PyAny>) -> PyResult<()> {
        self.inner.set_memory(extract_number(&value)?);
        Ok(())
    }

    fn __repr__(&self) -> String {
        "Calculator()".to_string()
    }
}

/// memocalc Python module
#[pymodule]
fn memocalc(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCalculator>()?;

    m.add("__doc__", "memocalc: arithmetic calculator with a read-once memory register")?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
