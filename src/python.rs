// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

#![cfg(feature = "python")]

use crate::error::PolynomialError;
use crate::polynomial::{OddDegreePolynomial, Polynomial, QuadraticPolynomial};
use crate::traits::PolynomialEval;
use pyo3::basic::CompareOp;
use pyo3::create_exception;
use pyo3::exceptions::{PyArithmeticError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyTuple};
use std::collections::HashMap;

create_exception!(polynomials, InvalidConstructionException, PyValueError);
create_exception!(polynomials, NotOddDegreeException, PyValueError);
create_exception!(polynomials, DegreeIsTooBigException, PyValueError);
create_exception!(polynomials, RootNotBracketedException, PyArithmeticError);

impl From<PolynomialError> for PyErr {
    fn from(err: PolynomialError) -> PyErr {
        let message = err.to_string();
        match err {
            PolynomialError::InvalidConstruction(_) => {
                InvalidConstructionException::new_err(message)
            }
            PolynomialError::NotOddDegree { .. } => NotOddDegreeException::new_err(message),
            PolynomialError::DegreeTooLarge { .. } => DegreeIsTooBigException::new_err(message),
            PolynomialError::RootNotBracketed => RootNotBracketedException::new_err(message),
        }
    }
}

/// `Polynomial(*args)` accepts a list of coefficients, another `Polynomial`,
/// a `{power: coefficient}` dict, or the coefficients themselves.
fn polynomial_from_args(args: &PyTuple) -> PyResult<Polynomial<f64>> {
    let first = match args.iter().next() {
        Some(first) => first,
        None => {
            return Err(PolynomialError::InvalidConstruction("no arguments given").into());
        }
    };
    if args.len() == 1 {
        if let Ok(source) = first.extract::<PyRef<PolynomialPy>>() {
            return Ok(Polynomial::from_copy(&source.value));
        }
        if let Ok(terms) = first.downcast::<PyDict>() {
            let terms: HashMap<usize, f64> = terms.extract()?;
            return Ok(Polynomial::from_power_map(terms)?);
        }
        if let Ok(coefficients) = first.extract::<Vec<f64>>() {
            return Ok(Polynomial::from_coefficients(coefficients)?);
        }
    }
    let coefficients: Vec<f64> = args.extract()?;
    Ok(Polynomial::from_coefficients(coefficients)?)
}

#[pyclass(name = "Polynomial", module = "polynomials")]
#[derive(Clone)]
struct PolynomialPy {
    value: Polynomial<f64>,
}

#[derive(FromPyObject)]
enum Operand {
    Polynomial(PolynomialPy),
    Scalar(f64),
}

impl Operand {
    fn into_polynomial(self) -> Polynomial<f64> {
        match self {
            Operand::Polynomial(polynomial) => polynomial.value,
            Operand::Scalar(value) => Polynomial::constant(value),
        }
    }
}

impl From<Polynomial<f64>> for PolynomialPy {
    fn from(value: Polynomial<f64>) -> Self {
        PolynomialPy { value }
    }
}

#[pymethods]
impl PolynomialPy {
    #[new]
    #[args(args = "*")]
    fn new(args: &PyTuple) -> PyResult<Self> {
        Ok(polynomial_from_args(args)?.into())
    }
    #[getter]
    fn coeffs(&self) -> Vec<f64> {
        self.value.coefficients().to_vec()
    }
    fn degree(&self) -> usize {
        self.value.degree()
    }
    #[args(d = "1")]
    fn der(&self, d: usize) -> Self {
        self.value.nth_derivative(d).into()
    }
    #[args(order = "1")]
    fn derivative(&self, order: usize) -> Self {
        self.der(order)
    }
    fn __call__(&self, val: f64) -> f64 {
        (&self.value).eval(&val)
    }
    fn __str__(&self) -> String {
        self.value.to_string()
    }
    fn __repr__(&self) -> String {
        format!("Polynomial {:?}", self.value.coefficients())
    }
    fn __richcmp__(&self, other: Operand, op: CompareOp) -> PyResult<bool> {
        let other = other.into_polynomial();
        match op {
            CompareOp::Eq => Ok(self.value == other),
            CompareOp::Ne => Ok(self.value != other),
            _ => Err(PyTypeError::new_err("polynomials are not ordered")),
        }
    }
    fn __add__(&self, other: Operand) -> Self {
        (&self.value + other.into_polynomial()).into()
    }
    fn __radd__(&self, other: Operand) -> Self {
        (&self.value + other.into_polynomial()).into()
    }
    fn __sub__(&self, other: Operand) -> Self {
        (&self.value - other.into_polynomial()).into()
    }
    fn __rsub__(&self, other: Operand) -> Self {
        (-(&self.value - other.into_polynomial())).into()
    }
    fn __mul__(&self, other: Operand) -> Self {
        match other {
            Operand::Polynomial(other) => (&self.value * &other.value).into(),
            Operand::Scalar(other) => (&self.value * other).into(),
        }
    }
    fn __rmul__(&self, other: Operand) -> Self {
        self.__mul__(other)
    }
    fn __neg__(&self) -> Self {
        (-&self.value).into()
    }
    fn __iter__(slf: PyRef<Self>) -> PyResult<Py<TermsIter>> {
        let terms: Vec<(usize, f64)> = slf
            .value
            .terms()
            .map(|(power, &coefficient)| (power, coefficient))
            .collect();
        Py::new(
            slf.py(),
            TermsIter {
                terms: terms.into_iter(),
            },
        )
    }
}

/// `(power, coefficient)` iterator; `iter(p)` always starts a new one
#[pyclass(module = "polynomials")]
struct TermsIter {
    terms: std::vec::IntoIter<(usize, f64)>,
}

#[pymethods]
impl TermsIter {
    fn __iter__(slf: PyRef<Self>) -> PyRef<Self> {
        slf
    }
    fn __next__(mut slf: PyRefMut<Self>) -> Option<(usize, f64)> {
        slf.terms.next()
    }
}

#[pyclass(name = "RealPolynomial", module = "polynomials")]
struct OddDegreePolynomialPy {
    value: OddDegreePolynomial<f64>,
}

#[pymethods]
impl OddDegreePolynomialPy {
    #[new]
    #[args(args = "*")]
    fn new(args: &PyTuple) -> PyResult<Self> {
        let value = OddDegreePolynomial::new(polynomial_from_args(args)?)?;
        Ok(OddDegreePolynomialPy { value })
    }
    #[getter]
    fn polynomial(&self) -> PolynomialPy {
        self.value.clone().into_polynomial().into()
    }
    fn find_root(&self, py: Python) -> PyResult<f64> {
        Ok(py.allow_threads(|| self.value.find_root())?)
    }
    fn __str__(&self) -> String {
        self.value.to_string()
    }
    fn __repr__(&self) -> String {
        format!("RealPolynomial {:?}", self.value.coefficients())
    }
}

#[pyclass(name = "QuadraticPolynomial", module = "polynomials")]
struct QuadraticPolynomialPy {
    value: QuadraticPolynomial<f64>,
}

#[pymethods]
impl QuadraticPolynomialPy {
    #[new]
    #[args(args = "*")]
    fn new(args: &PyTuple) -> PyResult<Self> {
        let value = QuadraticPolynomial::new(polynomial_from_args(args)?)?;
        Ok(QuadraticPolynomialPy { value })
    }
    #[getter]
    fn polynomial(&self) -> PolynomialPy {
        self.value.clone().into_polynomial().into()
    }
    fn solve(&self) -> Vec<f64> {
        self.value.solve()
    }
    fn __str__(&self) -> String {
        self.value.to_string()
    }
    fn __repr__(&self) -> String {
        format!("QuadraticPolynomial {:?}", self.value.coefficients())
    }
}

#[pymodule]
fn polynomials(py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PolynomialPy>()?;
    m.add_class::<OddDegreePolynomialPy>()?;
    m.add_class::<QuadraticPolynomialPy>()?;
    m.add(
        "InvalidConstructionException",
        py.get_type::<InvalidConstructionException>(),
    )?;
    m.add(
        "NotOddDegreeException",
        py.get_type::<NotOddDegreeException>(),
    )?;
    m.add(
        "DegreeIsTooBigException",
        py.get_type::<DegreeIsTooBigException>(),
    )?;
    m.add(
        "RootNotBracketedException",
        py.get_type::<RootNotBracketedException>(),
    )?;
    Ok(())
}
