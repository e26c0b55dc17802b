// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::field::FieldExhaustedError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyDomainError;

impl std::fmt::Display for EmptyDomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A cycle needs at least one element.")
    }
}

impl std::error::Error for EmptyDomainError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidSplitError {
    n: u64,
    m: u32,
}

impl InvalidSplitError {
    pub fn new(n: u64, m: u32) -> Self {
        Self { n, m }
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn m(&self) -> u32 {
        self.m
    }
}

impl std::fmt::Display for InvalidSplitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cannot split {} elements into {} cycles (need 1 <= m <= n)",
            self.n, self.m
        )
    }
}

impl std::error::Error for InvalidSplitError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleError {
    EmptyDomain(EmptyDomainError),
    InvalidSplit(InvalidSplitError),
    FieldExhausted(FieldExhaustedError),
}

impl std::fmt::Display for CycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CycleError::EmptyDomain(e) => write!(f, "{}", e),
            CycleError::InvalidSplit(e) => write!(f, "{}", e),
            CycleError::FieldExhausted(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CycleError {}

impl From<EmptyDomainError> for CycleError {
    fn from(err: EmptyDomainError) -> Self {
        CycleError::EmptyDomain(err)
    }
}

impl From<InvalidSplitError> for CycleError {
    fn from(err: InvalidSplitError) -> Self {
        CycleError::InvalidSplit(err)
    }
}

impl From<FieldExhaustedError> for CycleError {
    fn from(err: FieldExhaustedError) -> Self {
        CycleError::FieldExhausted(err)
    }
}
