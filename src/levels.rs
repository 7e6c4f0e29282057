/// Levels shipped with the binary, in XSB notation.
pub const BUILTIN_LEVELS: &[&str] = &[
    r#"
######
#@$ .#
######
"#,
    r#"
  #######
  #  .  #
  #  $  #
### $# ###
#   @   #
###   ###
  #  .  #
  #######
"#,
    r#"
    #####
    #   #
    #$  #
  ###  $##
  #  $ $ #
### # ## #   ######
#   # ## #####  ..#
# $  $          ..#
##### ### #@##  ..#
    #     #########
    #######
"#,
    r#"
########
# @$  .#
# $  $ #
# .# $ #
#..#   #
########
"#,
    r#"
 ### ###
#   #  .#
#   # . #
##$     #
 # $.* #
  # $##
   #@#
    #
"#,
];

pub fn builtin_level(index: usize) -> Option<&'static str> {
    BUILTIN_LEVELS.get(index).copied()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::level::load_session;

    #[test]
    fn every_builtin_level_loads() {
        for (index, level) in BUILTIN_LEVELS.iter().enumerate() {
            let session = load_session(level, "test");
            assert!(session.is_ok(), "level {} failed: {:?}", index, session.err());
        }
    }

    #[test]
    fn builtin_levels_are_not_already_won() {
        for level in BUILTIN_LEVELS {
            let session = load_session(level, "test").unwrap();
            assert!(!session.is_won());
        }
    }

    #[test]
    fn out_of_range_index_is_none() {
        assert!(builtin_level(BUILTIN_LEVELS.len()).is_none());
    }
}
