use alloy::sol;

sol! {
#[sol(rpc)]
interface INFTFlags {
    function enable() external;

    function addAllowedMinterMultiple(address[] memory minters) external;

    function isAllowedMinter(address minter) external view returns (bool);
}

#[sol(rpc)]
interface IChallenge4 {
    function addMinter(address minter) external;
}

#[sol(rpc)]
interface IChallenge1 {
    function registerTeam(string memory name, uint8 size) external;

    function teamInfo(address member) external view returns (string memory name, uint8 size);
}
}
