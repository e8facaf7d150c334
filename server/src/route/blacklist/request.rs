use crate::controller::Intake;
use application::transfer::RemoveBlacklistDto;
use uuid::Uuid;

pub struct Transformer;

impl Intake<Uuid> for Transformer {
    type To = RemoveBlacklistDto;
    fn emit(&self, id: Uuid) -> Self::To {
        RemoveBlacklistDto { id }
    }
}
