//
// minicsp-rs is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License  v3
// as published by the Free Software Foundation.
//
// minicsp-rs is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY.
// See the GNU Lesser General Public License  for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with minicsp-rs. If not, see http://www.gnu.org/licenses/lgpl-3.0.en.html
//
// Copyright (c)  2022 by X. Gillard
//

use minicsp_rs::prelude::*;

use proptest::{
    collection::{hash_set, vec},
    prop_assert, prop_assert_eq, proptest,
};

fn variables(n: usize) -> Vec<Variable> {
    (0..n).map(|i| Variable::new(format!("v{i}"))).collect()
}

proptest! {
    #[test]
    fn decomposition_has_one_constraint_per_pair(n in 1usize..10) {
        let vars = variables(n);
        let all = AllDifferent::new(vars.clone()).unwrap();
        let pairs = all.decompose();
        prop_assert_eq!(n * (n - 1) / 2, pairs.len());

        // lexicographic order on the positions in the scope
        let mut expected = vec![];
        for i in 0..n {
            for j in (i + 1)..n {
                expected.push(NotEqual::new(vars[i].clone(), vars[j].clone()));
            }
        }
        prop_assert_eq!(expected, pairs);
    }

    #[test]
    fn distinct_partial_values_are_satisfied(
        values in hash_set(0u32..100, 1..8),
        assigned in vec(proptest::bool::ANY, 8),
    ) {
        let values = values.into_iter().collect::<Vec<_>>();
        let vars = variables(values.len());
        let all = AllDifferent::new(vars.clone()).unwrap();

        let asg = vars
            .iter()
            .cloned()
            .zip(values.iter().copied())
            .zip(assigned.iter().copied())
            .filter(|(_, keep)| *keep)
            .map(|(pair, _)| pair)
            .collect::<Assignment<u32>>();
        prop_assert!(Constraint::<u32>::is_satisfied(&all, &asg));
    }

    #[test]
    fn agrees_with_its_decomposition(values in vec(0u8..4, 1..6)) {
        let vars = variables(values.len());
        let all = AllDifferent::new(vars.clone()).unwrap();
        let asg = vars
            .iter()
            .cloned()
            .zip(values.iter().copied())
            .collect::<Assignment<u8>>();

        let decomposed = all
            .decompose()
            .iter()
            .all(|ne| Constraint::<u8>::is_satisfied(ne, &asg));
        prop_assert_eq!(Constraint::<u8>::is_satisfied(&all, &asg), decomposed);
    }
}
