//! MIT license text

use super::format::dedent;
use chrono::Datelike;

/// MIT license for `holder`, dated `year`.
/// Without a holder the copyright line carries only the year.
pub fn mit(holder: Option<&str>, year: i32) -> String {
    let copyright = match holder.map(str::trim).filter(|h| !h.is_empty()) {
        Some(holder) => format!("Copyright (c) {year} {holder}"),
        None => format!("Copyright (c) {year}"),
    };

    dedent(&format!(
        "
        MIT License

        {copyright}

        Permission is hereby granted, free of charge, to any person obtaining a copy
        of this software and associated documentation files (the \"Software\"), to deal
        in the Software without restriction, including without limitation the rights
        to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
        copies of the Software, and to permit persons to whom the Software is
        furnished to do so, subject to the following conditions:

        The above copyright notice and this permission notice shall be included in all
        copies or substantial portions of the Software.

        THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
        IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
        FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
        AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
        LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
        OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
        SOFTWARE.
        "
    ))
}

/// Current local calendar year
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
