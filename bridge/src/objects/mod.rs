/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

pub use array::Array;
pub use function::Function;
pub use object::Object;
pub use symbol::Symbol;

mod array;
mod function;
mod object;
mod symbol;
