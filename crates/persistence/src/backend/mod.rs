// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Raw SQL the Diesel DSL cannot express: connection PRAGMAs, migrations,
//! and row id lookup.

pub mod sqlite;
