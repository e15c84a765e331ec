use crate::boxed::Box;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T> Serialize for Box<T>
where
    T: ?Sized + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.get().serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Box<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Box::new)
    }
}

#[cfg(feature = "pool")]
mod pool {
    use crate::pool_boxed::PoolBox;

    use heapless::pool::singleton::Pool;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<P> Serialize for PoolBox<P>
    where
        P: Pool,
        P::Data: Serialize,
    {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.get().serialize(serializer)
        }
    }

    /// Decoding claims a block from the pool; an exhausted pool is reported as
    /// a decoding error.
    impl<'de, P> Deserialize<'de> for PoolBox<P>
    where
        P: Pool,
        P::Data: Deserialize<'de>,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = <P::Data as Deserialize<'de>>::deserialize(deserializer)?;
            PoolBox::new(value).map_err(D::Error::custom)
        }
    }
}
