// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Defines an enum of labels that are coded as single letters.
///
/// Each variant gets its code letter and the label it's displayed with. The
/// letters must be listed in the order in which they appear in a NOTAM.
macro_rules! letter_codes {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = ($letter:literal, $label:literal),)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Code letters with their variant, in NOTAM order.
            pub const CODES: &'static [(char, Self)] = &[$(($letter, Self::$variant),)+];

            /// Returns the variant coded by `letter`.
            pub fn from_letter(letter: char) -> Option<Self> {
                match letter {
                    $($letter => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Returns the code letter.
            pub fn letter(&self) -> char {
                match self {
                    $(Self::$variant => $letter,)+
                }
            }

            /// Returns the label, e.g. as printed in NOTAM summaries.
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }
    };
}

/// Defines the enum of grammar rules with their names.
///
/// The rules are indexed by their declaration order.
macro_rules! rules {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident = $rule_name:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// All rules in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// The rule's name as written in the grammar.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $rule_name,)+
                }
            }
        }
    };
}
