//! Property-based tests for pyramid rendering

#[cfg(test)]
mod tests {
    use crate::core::pyramid::*;
    use proptest::prelude::*;

    // Strategy for heights the printer accepts
    prop_compose! {
        fn valid_height()(value in i64::from(MIN_HEIGHT)..=i64::from(MAX_HEIGHT)) -> Height {
            Height::new(value).unwrap()
        }
    }

    proptest! {
        #[test]
        fn test_height_accepts_exactly_one_to_eight(value in any::<i64>()) {
            prop_assert_eq!(Height::new(value).is_ok(), (1..=8).contains(&value));
        }

        #[test]
        fn test_row_shape(height in valid_height()) {
            let h = usize::from(height.get());
            let lines: Vec<String> = rows(height).collect();
            prop_assert_eq!(lines.len(), h);

            for (index, line) in lines.iter().enumerate() {
                let row = index + 1;
                prop_assert_eq!(line.len(), h);
                prop_assert_eq!(line.chars().take_while(|c| *c == ' ').count(), h - row);
                prop_assert!(line[h - row..].chars().all(|c| c == '#'));
            }
        }

        #[test]
        fn test_render_is_rows_joined_by_newlines(height in valid_height()) {
            let rendered = render(height);
            prop_assert!(rendered.ends_with('\n'));
            prop_assert_eq!(rendered.lines().count(), usize::from(height.get()));

            let joined: Vec<String> = rows(height).collect();
            prop_assert_eq!(rendered, format!("{}\n", joined.join("\n")));
        }
    }
}
