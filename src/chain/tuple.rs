use core::fmt;

use crate::Sequence;

use super::Chain;

macro_rules! impl_chain_for_tuple {
    ($mod_name: ident $StructName:ident $($F:ident)+) => {
        mod $mod_name {
            #[repr(usize)]
            enum Indexes {
                $($F,)+
            }

            $(
                pub(super) const $F: usize = Indexes::$F as usize;
            )+

            pub(super) const LEN: usize = [$(Indexes::$F,)+].len();
        }

        /// A sequence that chains a tuple of sequences one after another.
        ///
        /// This `struct` is created by the [`chain`] method on the [`Chain`]
        /// trait. See its documentation for more.
        ///
        /// [`chain`]: crate::Chain::chain
        /// [`Chain`]: crate::Chain
        pub struct $StructName<$($F,)+> {
            index: usize,
            $( $F: $F,)+
        }

        impl<T, $($F,)+> Sequence for $StructName<$($F,)+>
        where
            $($F: Sequence<Item = T>,)+
        {
            type Item = T;

            fn next(&mut self) -> Option<Self::Item> {
                loop {
                    let item = match self.index {
                        $(
                            $mod_name::$F => self.$F.next(),
                        )+
                        _ => return None,
                    };
                    match item {
                        Some(item) => return Some(item),
                        None => self.index += 1,
                    }
                }
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let mut lower = 0usize;
                let mut upper = Some(0usize);
                $(
                    if self.index <= $mod_name::$F {
                        let (l, u) = self.$F.size_hint();
                        lower = lower.saturating_add(l);
                        upper = match (upper, u) {
                            (Some(a), Some(b)) => a.checked_add(b),
                            _ => None,
                        };
                    }
                )+
                if self.index >= $mod_name::LEN {
                    return (0, Some(0));
                }
                (lower, upper)
            }
        }

        impl<$($F,)+> fmt::Debug for $StructName<$($F,)+>
        where
            $($F: fmt::Debug,)+
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple("Chain")
                    $(.field(&self.$F))+
                    .finish()
            }
        }

        impl<T, $($F,)+> Chain for ($($F,)+)
        where
            $($F: Sequence<Item = T>,)+
        {
            type Item = T;

            type Sequence = $StructName<$($F,)+>;

            fn chain(self) -> Self::Sequence {
                let ($($F,)*): ($($F,)*) = self;
                Self::Sequence {
                    index: 0,
                    $($F,)+
                }
            }
        }
    }
}

impl_chain_for_tuple! { chain_1 Chain1 A }
impl_chain_for_tuple! { chain_2 Chain2 A B }
impl_chain_for_tuple! { chain_3 Chain3 A B C }
impl_chain_for_tuple! { chain_4 Chain4 A B C D }
impl_chain_for_tuple! { chain_5 Chain5 A B C D E }
impl_chain_for_tuple! { chain_6 Chain6 A B C D E F }
impl_chain_for_tuple! { chain_7 Chain7 A B C D E F G }
impl_chain_for_tuple! { chain_8 Chain8 A B C D E F G H }
impl_chain_for_tuple! { chain_9 Chain9 A B C D E F G H I }
impl_chain_for_tuple! { chain_10 Chain10 A B C D E F G H I J }
impl_chain_for_tuple! { chain_11 Chain11 A B C D E F G H I J K }
impl_chain_for_tuple! { chain_12 Chain12 A B C D E F G H I J K L }
