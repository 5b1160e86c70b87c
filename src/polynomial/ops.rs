// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

mod add_sub;
mod mul;
mod reflected;
pub(crate) mod util;
