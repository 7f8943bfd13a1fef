//! Black-box tests over the public `ipvx-core` API.

#[cfg(test)]
mod ordering;
#[cfg(test)]
mod parsing;
#[cfg(test)]
mod ranges;
